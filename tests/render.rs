use cairo::ImageSurface;
use snooker_table::Canvas;
use snooker_table::assets::PocketImages;
use snooker_table::config::TableConfig;
use snooker_table::draw::Image;

/// Reads the pixel at (x, y) as premultiplied (r, g, b, a).
fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> (u8, u8, u8, u8) {
    let stride = surface.stride() as usize;
    let data = surface.data().expect("exclusive surface access");
    let offset = y as usize * stride + x as usize * 4;
    // ARGB32 pixels are native-endian 32-bit words with alpha in the high byte
    let word = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        ((word >> 16) & 0xff) as u8,
        ((word >> 8) & 0xff) as u8,
        (word & 0xff) as u8,
        (word >> 24) as u8,
    )
}

fn solid_image(name: &str, width: i32, height: i32, rgb: (f64, f64, f64)) -> Image {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    {
        let ctx = cairo::Context::new(&surface).unwrap();
        ctx.set_source_rgb(rgb.0, rgb.1, rgb.2);
        ctx.paint().unwrap();
    }
    Image::new(name, surface)
}

fn base_surface(config: &TableConfig, pockets: &PocketImages) -> ImageSurface {
    Canvas::new(config, pockets).unwrap().into_surface()
}

#[test]
fn table_layers_are_painted() {
    let config = TableConfig::default();
    let mut surface = base_surface(&config, &PocketImages::default());

    // Outside the table stays transparent
    assert_eq!(pixel(&mut surface, 5, 5).3, 0);
    // Wooden edge
    assert_eq!(pixel(&mut surface, 25, 200), (96, 71, 37, 255));
    // Cushion
    assert_eq!(pixel(&mut surface, 35, 200), (94, 167, 62, 255));
    // Playing surface away from any marking
    assert_eq!(pixel(&mut surface, 400, 150), (105, 187, 70, 255));
}

#[test]
fn balls_overlay_paints_colours_once() {
    let config = TableConfig::default();
    let mut canvas = Canvas::new(&config, &PocketImages::default()).unwrap();
    assert!(canvas.show_balls());
    assert!(!canvas.show_balls());
    assert!(canvas.overlays().balls_shown());
    let mut surface = canvas.into_surface();

    // Blue ball on the center spot
    assert_eq!(pixel(&mut surface, 320, 240), (0, 0, 255, 255));
    // Black ball
    assert_eq!(pixel(&mut surface, 549, 240), (0, 0, 0, 255));
    // Rack apex
    assert_eq!(pixel(&mut surface, 470, 240), (255, 0, 0, 255));
}

#[test]
fn guides_overlay_marks_the_surface() {
    let config = TableConfig::default();
    let mut plain = base_surface(&config, &PocketImages::default());

    let mut canvas = Canvas::new(&config, &PocketImages::default()).unwrap();
    assert!(canvas.show_guides());
    let mut guided = canvas.into_surface();

    // A point on the top-left to bottom-right diagonal, away from the spots
    let (x, y) = (180, 175);
    assert_ne!(pixel(&mut plain, x, y), pixel(&mut guided, x, y));
}

#[test]
fn pocket_images_are_composited_at_the_corners() {
    let config = TableConfig::default();
    let pockets = PocketImages {
        corner: Some(solid_image("corner", 20, 20, (0.0, 0.0, 0.0))),
        center: Some(solid_image("center", 30, 15, (1.0, 1.0, 1.0))),
    };
    let mut surface = base_surface(&config, &pockets);

    // Top-left corner
    assert_eq!(pixel(&mut surface, 25, 95), (0, 0, 0, 255));
    // Bottom-right corner, rotated into place
    assert_eq!(pixel(&mut surface, 615, 385), (0, 0, 0, 255));
    // Top center pocket spans 305..335
    assert_eq!(pixel(&mut surface, 320, 95), (255, 255, 255, 255));
    // Bottom center pocket, rotated half a turn about (335, 390)
    assert_eq!(pixel(&mut surface, 320, 385), (255, 255, 255, 255));
}

#[test]
fn png_output_round_trips_through_cairo() {
    let config = TableConfig::default();
    let canvas = Canvas::new(&config, &PocketImages::default()).unwrap();
    let bytes = canvas.to_png_bytes().unwrap();

    let decoded = ImageSurface::create_from_png(&mut std::io::Cursor::new(bytes)).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (640, 480));
}

#[test]
fn later_overlay_stacks_on_top() {
    let config = TableConfig::default();

    let mut guides_first = Canvas::new(&config, &PocketImages::default()).unwrap();
    guides_first.show_guides();
    guides_first.show_balls();
    let mut guides_first = guides_first.into_surface();

    let mut balls_first = Canvas::new(&config, &PocketImages::default()).unwrap();
    balls_first.show_balls();
    balls_first.show_guides();
    let mut balls_first = balls_first.into_surface();

    // The (left, top) -> (right, bottom) guide runs through the blue spot
    assert_eq!(pixel(&mut guides_first, 320, 240), (0, 0, 255, 255));
    assert_ne!(pixel(&mut balls_first, 320, 240), (0, 0, 255, 255));
}
