use mime_part::{DynamicImage, Image, ImageFormat, ImagePart, ImagePartCompiler};

fn main() {
    let part = match std::env::args().nth(1) {
        Some(path) => ImagePart::from_path(path).unwrap(),
        None => ImagePart::from_image(Image::new(DynamicImage::new_rgba8(8, 8), ImageFormat::Png))
            .with_filename("blank.png"),
    };

    let mime = ImagePartCompiler::new()
        .compile_msg(&part.with_content_id("image@localhost"))
        .unwrap()
        .subject("Inline image")
        .write_to_string()
        .unwrap();

    println!("================================");
    println!("COMPILED MIME MESSAGE");
    println!("================================");
    println!();
    println!("{mime}");
}
