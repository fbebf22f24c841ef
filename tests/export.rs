use egui::{Color32, pos2};
use sketchpad::{Bitmap, CanvasController, PaintError, StrokeWidth, Tool};

fn sample_drawing() -> CanvasController {
    let mut canvas = CanvasController::new(64, 48);
    canvas.set_color(Color32::from_rgb(250, 128, 3));
    canvas.on_pointer_down(pos2(3.0, 4.0));
    canvas.on_pointer_move(pos2(40.0, 30.0));
    canvas.on_pointer_up(pos2(40.0, 30.0));

    canvas.select_tool(Tool::Oval);
    canvas.set_stroke_width(StrokeWidth::new(8).unwrap());
    canvas.on_pointer_down(pos2(20.0, 5.0));
    canvas.on_pointer_up(pos2(60.0, 45.0));
    canvas
}

#[test]
fn test_export_round_trip_is_pixel_exact() {
    let canvas = sample_drawing();
    let bytes = canvas.export_bitmap().unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));

    let decoded = Bitmap::decode_png(&bytes).unwrap();
    assert_eq!(decoded.size(), [64, 48]);
    assert_eq!(decoded.as_raw(), canvas.bitmap().as_raw());
}

#[test]
fn test_export_size_after_resize() {
    let mut canvas = sample_drawing();
    for (w, h) in [(1, 1), (321, 123), (64, 48)] {
        canvas.resize(w, h);
        let decoded = Bitmap::decode_png(&canvas.export_bitmap().unwrap()).unwrap();
        assert_eq!(decoded.size(), [w, h]);
    }
}

#[test]
fn test_save_appends_png_extension() {
    let dir = tempfile::tempdir().unwrap();
    let canvas = sample_drawing();

    let saved = canvas.save_png(dir.path().join("drawing")).unwrap();
    assert_eq!(saved, dir.path().join("drawing.png"));

    let bytes = std::fs::read(&saved).unwrap();
    let decoded = Bitmap::decode_png(&bytes).unwrap();
    assert_eq!(&decoded, canvas.bitmap());

    let saved = canvas.save_png(dir.path().join("upper.PNG")).unwrap();
    assert_eq!(saved, dir.path().join("upper.PNG"));
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("no_such_dir").join("drawing.png");

    let err = CanvasController::new(8, 8).save_png(&target).unwrap_err();
    match &err {
        PaintError::Io { path, .. } => assert_eq!(path, &target),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("no_such_dir"));
}
