use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

/// Aspect ratio of a viewport, `None` while it has no area.
pub fn aspect_ratio(width: f32, height: f32) -> Option<f32> {
    (width > 0.0 && height > 0.0).then(|| width / height)
}

/// Keeps the perspective camera's aspect ratio in step with the primary window.
/// The canvas itself follows its parent element.
pub fn handle_window_resize(
    mut resized: MessageReader<WindowResized>,
    primary_window: Query<(), With<PrimaryWindow>>,
    mut camera_query: Query<&mut Projection, With<Camera3d>>,
) {
    // Only the latest size matters
    let Some(event) = resized
        .read()
        .filter(|event| primary_window.contains(event.window))
        .last()
    else {
        return;
    };
    let Some(aspect) = aspect_ratio(event.width, event.height) else {
        return;
    };

    for mut projection in &mut camera_query {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect;
        }
    }
    debug!("Viewport resized to {}x{}", event.width, event.height);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_follows_viewport() {
        assert_eq!(aspect_ratio(1920.0, 1080.0), Some(1920.0 / 1080.0));
        assert_eq!(aspect_ratio(300.0, 600.0), Some(0.5));
    }

    fn resize_app() -> (App, Entity, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_message::<WindowResized>()
            .add_systems(Update, handle_window_resize);
        let primary = app.world_mut().spawn((Window::default(), PrimaryWindow)).id();
        let other = app.world_mut().spawn(Window::default()).id();
        app.world_mut().spawn((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection::default()),
        ));
        (app, primary, other)
    }

    fn resize(app: &mut App, window: Entity, width: f32, height: f32) {
        app.world_mut().write_message(WindowResized {
            window,
            width,
            height,
        });
        app.update();
    }

    fn camera_aspect(app: &mut App) -> f32 {
        let mut query = app.world_mut().query_filtered::<&Projection, With<Camera3d>>();
        match query.single(app.world()).unwrap() {
            Projection::Perspective(perspective) => perspective.aspect_ratio,
            _ => panic!("camera is not perspective"),
        }
    }

    #[test]
    fn camera_follows_primary_window_only() {
        let (mut app, primary, other) = resize_app();

        resize(&mut app, primary, 800.0, 400.0);
        assert_eq!(camera_aspect(&mut app), 2.0);

        resize(&mut app, other, 300.0, 600.0);
        assert_eq!(camera_aspect(&mut app), 2.0);

        // A zero-area primary window keeps the last aspect
        resize(&mut app, primary, 0.0, 400.0);
        assert_eq!(camera_aspect(&mut app), 2.0);
    }

    #[test]
    fn empty_viewport_is_ignored() {
        assert_eq!(aspect_ratio(800.0, 0.0), None);
        assert_eq!(aspect_ratio(0.0, 600.0), None);
    }
}
