use trisphere::raytracer::{Camera, Color, Image, Point3, Renderer, Scene, to_channel};

fn render_lines(renderer: &Renderer) -> Vec<String> {
    let out = renderer.render(Vec::new()).expect("Render into memory can't fail");
    String::from_utf8(out)
        .expect("PPM output should be valid UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

fn pixel_line(lines: &[String], width: usize, i: usize, j: usize) -> &str {
    &lines[3 + j * width + i]
}

fn assert_close(a: Point3, b: Point3) {
    assert!((a - b).abs().max_element() < 1e-12, "{} != {}", a, b);
}

#[test]
fn camera_pixel_centers() {
    let camera = Camera::default();
    assert_eq!(camera.image_size(), (400, 400));
    assert_close(camera.pixel_center(0, 0), Point3::new(-0.49875, 0.49875, -1.0));
    assert_close(camera.pixel_center(399, 399), Point3::new(0.49875, -0.49875, -1.0));
    assert_close(camera.pixel_center(200, 200), Point3::new(0.00125, -0.00125, -1.0));

    let ray = camera.create_pixel_ray(200, 200);
    assert_eq!(ray.origin(), Point3::ZERO);
    assert_close(ray.direction(), Point3::new(0.00125, -0.00125, -1.0));
}

#[test]
fn camera_offset_center() {
    let center = Point3::new(1.0, 2.0, 3.0);
    let camera = Camera::new(center, 2.0, (1.0, 1.0), (2, 2));
    assert_eq!(camera.center(), center);
    let ray = camera.create_pixel_ray(0, 0);
    assert_eq!(ray.origin(), center);
    assert_close(ray.direction(), Point3::new(-0.25, 0.25, -2.0));
}

#[test]
fn camera_aspect_ratio_mismatch() {
    assert!(!Camera::default().is_distorted());
    assert!(Camera::new(Point3::ZERO, 1.0, (1.0, 1.0), (800, 400)).is_distorted());
    assert!(!Camera::new(Point3::ZERO, 1.0, (2.0, 1.0), (800, 400)).is_distorted());
}

#[test]
fn channel_mapping() {
    assert_eq!(to_channel(0.0), 0);
    assert_eq!(to_channel(1.0), 255);
    assert_eq!(to_channel(0.5), 127);
    assert_eq!(to_channel(1.5), 255);
    assert_eq!(to_channel(-0.2), 0);
}

#[test]
fn render_default_scene() {
    let renderer = Renderer::default();
    let lines = render_lines(&renderer);

    assert_eq!(&lines[..3], ["P3", "400 400", "255"]);
    assert_eq!(lines.len(), 3 + 400 * 400);
    for line in &lines[3..] {
        let channels: Vec<u8> = line
            .split(' ')
            .map(|v| v.parse().expect("Channel should be an integer in [0, 255]"))
            .collect();
        assert_eq!(channels.len(), 3);
    }

    assert_eq!(pixel_line(&lines, 400, 200, 200), "255 0 0");
    assert_eq!(pixel_line(&lines, 400, 200, 300), "255 0 0");
    assert_eq!(pixel_line(&lines, 400, 320, 200), "0 255 0");
    assert_eq!(pixel_line(&lines, 400, 80, 200), "0 0 255");
    assert_eq!(pixel_line(&lines, 400, 0, 0), "255 255 255");
    assert_eq!(pixel_line(&lines, 400, 399, 399), "255 255 255");
    assert!((0..400).all(|i| pixel_line(&lines, 400, i, 0) == "255 255 255"));
}

#[test]
fn render_image_matches_ppm() {
    let camera = Camera::new(Point3::ZERO, 1.0, (1.0, 1.0), (40, 40));
    let renderer = Renderer::new(Scene::default(), camera);

    let lines = render_lines(&renderer);
    let image = renderer.render_image();
    assert_eq!(image.size(), (40, 40));

    let bytes = image.to_bytes();
    for (pixel, line) in bytes.chunks(3).zip(&lines[3..]) {
        assert_eq!(format!("{} {} {}", pixel[0], pixel[1], pixel[2]), *line);
    }
    assert_eq!(bytes.len(), 40 * 40 * 3);
}

#[test]
fn image_set_clamps() {
    let mut image = Image::new((2, 1));
    image.set(1, 0, Color::new(2.0, -1.0, 0.5));
    assert_eq!(image.get(0, 0), Color::ZERO);
    assert_eq!(image.get(1, 0), Color::new(1.0, 0.0, 0.5));
    assert_eq!(image.to_bytes(), vec![0, 0, 0, 255, 0, 127]);
}

#[test]
fn save_png() {
    let camera = Camera::new(Point3::ZERO, 1.0, (1.0, 1.0), (16, 16));
    let renderer = Renderer::new(Scene::default(), camera);
    let path = std::env::temp_dir().join(format!("trisphere_{}.png", std::process::id()));

    renderer
        .render_image()
        .save_png(&path)
        .expect("PNG should be written");
    let content = std::fs::read(&path).expect("PNG file should exist");
    std::fs::remove_file(&path).ok();

    assert_eq!(&content[..8], b"\x89PNG\r\n\x1a\n");
}
