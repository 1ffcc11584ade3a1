//! Read XMP metadata from a file
//!
//! This example locates the XMP packet embedded in any file (JPEG, TIFF,
//! DNG, PSD, a sidecar `.xmp`, ...) and prints a few decoded properties.
//! Built with `--features serde`, it prints the whole aggregate as JSON.

use std::env;

// Picks the single file argument; args[0] is the executable, when present.
fn path_argument(args: &[String]) -> Result<&str, String> {
    match args {
        [_, path] => Ok(path.as_str()),
        _ => Err(format!(
            "expected 1 argument (file name), got {} arguments",
            args.len().saturating_sub(1)
        )),
    }
}

fn read_xmp_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let path = path_argument(&args)?;

    let xmp = xmpstream::parse_file(path)?
        .ok_or_else(|| format!("no XMP packet in file {}", path))?;

    #[cfg(feature = "serde")]
    {
        println!("{}", serde_json::to_string_pretty(&xmp)?);
    }

    #[cfg(not(feature = "serde"))]
    {
        println!("CreatorTool = {}", xmp.basic.creator_tool);
        println!("Rating = {}", xmp.basic.rating);
        if !xmp.basic.create_date.is_zero() {
            println!("CreateDate = {}", xmp.basic.create_date);
        }
        println!("Camera = {} {}", xmp.tiff.make, xmp.tiff.model);
        if !xmp.aux.lens.is_empty() {
            println!("Lens = {}", xmp.aux.lens);
        }
        println!(
            "Exposure = {}s f/{} ISO {:?}",
            xmp.exif.exposure_time,
            xmp.exif.f_number.to_f64(),
            xmp.exif.iso_speed_ratings
        );
        for (index, subject) in xmp.dc.subject.iter().enumerate() {
            println!("dc:subject[{}] = {}", index, subject);
        }
        if !xmp.mm.document_id.is_nil() {
            println!("DocumentID = {}", xmp.mm.document_id);
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = read_xmp_from_file() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
