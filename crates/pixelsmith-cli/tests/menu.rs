use pixelsmith_cli::image_io::{ImageIoError, ImageSink};
use pixelsmith_cli::menu::run_menu;
use pixelsmith_core::{Color, PixelBuffer, transform};

/// Keeps every stored image in memory.
#[derive(Default)]
struct RecordingSink {
    images: Vec<PixelBuffer>,
}

impl ImageSink for RecordingSink {
    fn store(&mut self, image: &PixelBuffer) -> Result<String, ImageIoError> {
        self.images.push(image.clone());
        Ok(format!("memory://{}", self.images.len()))
    }
}

fn source() -> PixelBuffer {
    PixelBuffer::from_pixels(2, 1, &[Color::new(1, 2, 3), Color::new(4, 5, 6)]).unwrap()
}

fn session(script: &str, image: Option<&PixelBuffer>) -> (String, RecordingSink) {
    session_bytes(script.as_bytes(), image)
}

fn session_bytes(mut input: &[u8], image: Option<&PixelBuffer>) -> (String, RecordingSink) {
    let mut out = Vec::new();
    let mut sink = RecordingSink::default();
    run_menu(&mut input, &mut out, image, &mut sink).unwrap();
    (String::from_utf8(out).unwrap(), sink)
}

#[test]
fn exit_choice_ends_the_session() {
    let img = source();
    let (text, sink) = session("15\n1\n", Some(&img));
    assert!(text.starts_with("Image Editor!"));
    assert!(text.ends_with("Exiting the code!\n"));
    assert!(sink.images.is_empty());
}

#[test]
fn end_of_input_exits_cleanly() {
    let (text, _) = session("", None);
    assert!(text.contains("15. Exit"));
    assert!(text.ends_with("Exiting the code!\n"));
}

#[test]
fn invalid_choices_keep_the_loop_running() {
    let img = source();
    let (text, sink) = session("abc\n0\n99\n\n3\n15\n", Some(&img));
    assert_eq!(text.matches("Error: invalid choice").count(), 3);
    assert_eq!(sink.images, vec![transform::negative(&img)]);
    assert!(text.contains("You can see the output by opening the file -> memory://1"));
}

#[test]
fn selections_always_start_from_the_loaded_image() {
    let img = source();
    let (_, sink) = session("3\n3\n15\n", Some(&img));
    let negative = transform::negative(&img);
    assert_eq!(sink.images, vec![negative.clone(), negative]);
}

#[test]
fn parameters_are_prompted_for() {
    let img = source();
    let (text, sink) = session("2\n-100\n5\n90\n15\n", Some(&img));
    assert!(text.contains("Enter brightness change in percent"));
    assert!(text.contains("Enter rotation angle in degrees:"));
    assert_eq!(sink.images.len(), 2);
    assert!(sink.images[0].pixels().iter().all(|&px| px == Color::BLACK));
    assert_eq!(sink.images[1], transform::rotate(&img, 90.0));
}

#[test]
fn malformed_parameter_is_reported() {
    let img = source();
    let (text, sink) = session("2\nlots\n15\n", Some(&img));
    assert!(text.contains("Error: `lots` is not a number"));
    assert!(sink.images.is_empty());
    assert!(text.ends_with("Exiting the code!\n"));
}

#[test]
fn invalid_block_size_is_reported() {
    let img = source();
    let (text, sink) = session("12\n0\n", Some(&img));
    assert!(text.contains("Error: invalid input"));
    assert!(sink.images.is_empty());
}

#[test]
fn dump_prints_rows_without_writing_a_file() {
    let img = source();
    let (text, sink) = session("13\n15\n", Some(&img));
    assert!(text.contains("(1 2 3)(4 5 6)\n"));
    assert!(sink.images.is_empty());
}

#[test]
fn missing_image_is_reported_per_selection() {
    let (text, sink) = session("1\n13\n15\n", None);
    assert_eq!(text.matches("Error: invalid input: no image loaded").count(), 2);
    assert!(sink.images.is_empty());
}

#[test]
fn undecodable_selection_is_an_invalid_choice() {
    let img = source();
    let (text, sink) = session_bytes(b"\xff\xfe\n3\n15\n", Some(&img));
    assert_eq!(text.matches("Error: invalid choice").count(), 1);
    assert_eq!(sink.images, vec![transform::negative(&img)]);
    assert!(text.ends_with("Exiting the code!\n"));
}

#[test]
fn parameter_may_follow_the_choice_on_one_line() {
    let img = source();
    let (text, sink) = session("2 50\n6 30\n15\n", Some(&img));
    assert!(!text.contains("Enter brightness change in percent"));
    assert!(!text.contains("Enter rotation angle in degrees:"));
    assert_eq!(
        sink.images,
        vec![
            transform::change_brightness(&img, 50.0),
            transform::rotate_counterclockwise(&img, 30.0),
        ]
    );
}

#[test]
fn inline_parameter_that_is_not_a_number_is_reported() {
    let img = source();
    let (text, sink) = session("12 big\n15\n", Some(&img));
    assert!(text.contains("Error: `big` is not a number"));
    assert!(sink.images.is_empty());
}

#[test]
fn menu_keeps_the_numbered_prompt() {
    let (text, _) = session("15\n", None);
    assert!(text.starts_with("Image Editor!\nChoose a number between 1 and 15:\n\t1. Convert to grayscale\n"));
}
