//! Demo scene: world axes, a plane, a ray, and a camera with its image.
//!
//! The scene is rendered headlessly into a `RecordingRenderer`, and a summary
//! of what would be drawn is printed. Pass a `.png` path to also save the
//! camera image as resampled onto the far plane.

use geoscope::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    init()?;

    let mut rng = StdRng::seed_from_u64(112);

    // World axes
    register_coordinate_frame_with(
        "world",
        Pose::IDENTITY,
        AxesConfig {
            label: Some("world".into()),
            ..AxesConfig::default()
        },
    )?;

    // A plane with its normal
    register_plane_with(
        "pi",
        random_pose(&mut rng),
        0.2,
        0.1,
        PlaneConfig {
            label: Some("pi".into()),
            normal_scale: 0.05,
            ..PlaneConfig::default()
        },
    )?;

    // A dashed ray
    register_ray_with(
        "ray",
        DVec3::ZERO,
        DVec3::new(0.1, 0.1, 0.0),
        RayConfig {
            line_style: LineStyle::Dashed,
            line_width: 1.0,
            label: Some("ray".into()),
            ..RayConfig::default()
        },
    )?;

    // A camera looking at a chessboard with a cyan marker in its top-left
    // square
    let pose = random_pose(&mut rng);
    let k = Intrinsics::new(800.0, 800.0, 320.0, 240.0);
    let fov = fov_from_intrinsics(&k, 480, 640)?;
    let mut image = chessboard(8, 6, 80)?;
    image.fill_rect(0, 0, 80, 80, palette::CYAN);

    register_camera_frustum("camera", pose, fov)?.set_scale(0.1);
    let camera_image = register_camera_image(
        "camera",
        pose,
        fov,
        image,
        CameraImageConfig {
            scale: 0.1,
            texel_grid: TexelGrid::new(32, 32),
            ..CameraImageConfig::default()
        },
    )?;

    // Mark the camera origin
    register_coordinate_frame_with(
        "camera axes",
        pose,
        AxesConfig {
            label: Some("a camera".into()),
            ..AxesConfig::default()
        },
    )?;

    let mut renderer = RecordingRenderer::new();
    render(&mut renderer)?;

    let bounds = scene_bounds()?;
    println!("Field of view: {:.4} x {:.4} rad", fov.horizontal(), fov.vertical());
    println!("Draw list: {}", renderer.summary());
    println!("Labels: {}", renderer.label_texts().join(", "));
    println!(
        "Scene bounds: ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
        bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
    );

    if let Some(path) = std::env::args().nth(1) {
        if let Some(surface) = camera_image.surface() {
            match save_surface_texture(&path, &surface) {
                Ok(()) => println!("Saved camera image texture to {path}"),
                Err(e) => eprintln!("Could not save {path}: {e}"),
            }
        }
    }

    shutdown();
    Ok(())
}
