#![cfg(all(feature = "compiler", feature = "interpreter"))]

use image::{Rgba, RgbaImage};
use mail_builder::{mime::MimePart as MimeBuilderPart, MessageBuilder};
use mime_part::{
    Content, Disposition, Image, ImageEncoding, ImageFormat, ImagePart, ImagePartCompiler,
    ImagePartInterpreter, MimePart,
};

fn checkerboard() -> Image {
    let pixels = RgbaImage::from_fn(4, 4, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });

    Image::new(pixels, ImageFormat::Png)
}

#[test_log::test]
fn compile_then_interpret() {
    let board = checkerboard();
    let part = ImagePart::from_image(board.clone())
        .with_filename("board.png")
        .with_content_id("board@localhost")
        .with_description("A checkerboard")
        .with_disposition(Disposition::Attachment);

    let msg = ImagePartCompiler::new()
        .compile_msg(&part)
        .unwrap()
        .from("alice@localhost")
        .to("bob@localhost")
        .subject("checkerboard");

    let parts = ImagePartInterpreter::new()
        .interpret_msg_builder(msg)
        .unwrap();

    assert_eq!(parts.len(), 1);

    let interpreted = &parts[0];
    assert_eq!(interpreted.content_type(), "image/png");
    assert_eq!(interpreted.filename(), Some("board.png"));
    assert_eq!(interpreted.content_id(), Some("board@localhost"));
    assert_eq!(interpreted.description(), Some("A checkerboard"));
    assert!(interpreted.is_attachment());

    let image = match interpreted.content() {
        Content::Image(image) => image,
        content => panic!("expected image content, got {content:?}"),
    };

    assert_eq!(image.dimensions(), (4, 4));
    assert_eq!(image.as_dynamic().to_rgba8(), board.as_dynamic().to_rgba8());
}

#[test_log::test]
fn compiled_parts_inside_multipart() {
    let compiler = ImagePartCompiler::new().with_encoding(ImageEncoding::Gif);

    let first = ImagePart::from_image(checkerboard()).with_filename("first.gif");
    let second = ImagePart::from_image(checkerboard()).with_filename("second.gif");

    let msg = MessageBuilder::new().body(MimeBuilderPart::new(
        "multipart/mixed",
        vec![
            MimeBuilderPart::new("text/plain", "Two boards attached."),
            compiler.compile(&first).unwrap(),
            compiler.compile(&second).unwrap(),
        ],
    ));

    let parts = ImagePartInterpreter::new()
        .interpret_msg_builder(msg)
        .unwrap();

    let names: Vec<_> = parts.iter().filter_map(|part| part.filename()).collect();
    assert_eq!(names, vec!["first.gif", "second.gif"]);

    for part in parts {
        assert_eq!(part.image().map(Image::format), Some(ImageFormat::Gif));
    }
}

#[test_log::test]
fn images_of_attached_messages() {
    let inner = ImagePart::from_image(checkerboard()).with_filename("inner.png");
    let inner = ImagePartCompiler::new()
        .compile_msg(&inner)
        .unwrap()
        .from("alice@localhost")
        .subject("inner")
        .write_to_vec()
        .unwrap();

    let outer = MessageBuilder::new()
        .from("bob@localhost")
        .subject("outer")
        .text_body("See attached message.")
        .attachment("message/rfc822", "inner.eml", inner);

    let parts = ImagePartInterpreter::new()
        .interpret_msg_builder(outer)
        .unwrap();

    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].filename(), Some("inner.png"));
}
