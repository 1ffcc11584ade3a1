//! End-to-end tests for packet parsing
//!
//! These tests drive `xmpstream::parse` and `XmpReader` over whole packets,
//! embedded in container-like noise where relevant.

#[path = "fixtures/mod.rs"]
mod fixtures;

use fixtures::{attribute_packet, embed, packet, LIGHTROOM};
use log::{Level, Log, Metadata, Record};
use std::io::{self, Read};
use std::sync::Mutex;
use xmpstream::{
    parse, Phase, Rational, SRational, Uuid, Xmp, XmpError, XmpReader, XmpReaderOptions,
};

// Hands out at most one byte per read call.
struct Trickle<'a>(&'a [u8]);

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match (self.0.split_first(), buf.first_mut()) {
            (Some((&b, rest)), Some(slot)) => {
                *slot = b;
                self.0 = rest;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

// Fails every read with the given kind.
struct Broken(io::ErrorKind);

impl Read for Broken {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(self.0, "device gone"))
    }
}

#[derive(Default)]
struct Capture {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn parse_str(data: &str) -> Xmp {
    parse(data.as_bytes())
        .expect("parse failed")
        .expect("packet missing")
}

mod packets {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lightroom_packet_decodes_every_namespace() {
        let xmp = parse_str(LIGHTROOM);

        assert_eq!(xmp.basic.creator_tool, "Canon EOS 5D Mark III");
        assert_eq!(xmp.basic.rating, 4);
        assert_eq!(xmp.basic.label, "Red");
        assert_eq!(xmp.basic.modify_date.year, 2018);
        assert_eq!(xmp.basic.modify_date.tz_sign, -1);
        assert_eq!(xmp.basic.create_date.day, 30);

        assert_eq!(xmp.aux.serial_number, "082024001234");
        assert_eq!(xmp.aux.lens, "EF24-105mm f/4L IS USM");
        assert_eq!(xmp.aux.lens_id, 235);
        assert_eq!(xmp.aux.lens_info.len(), 4);
        assert_eq!(xmp.aux.lens_info[1], Rational::new(105, 1));
        assert_eq!(xmp.aux.flash_compensation, SRational::new(-1, 3));
        assert_eq!(xmp.aux.approximate_focus_distance, Rational::new(429, 100));

        assert_eq!(xmp.exif.exposure_time, Rational::new(1, 250));
        assert_eq!(xmp.exif.f_number, Rational::new(8, 1));
        assert_eq!(xmp.exif.exposure_program, 3);
        assert_eq!(xmp.exif.iso_speed_ratings, vec![400]);
        assert_eq!(xmp.exif.pixel_x_dimension, 5760);
        assert_eq!(xmp.exif.date_time_original.hour, 9);

        assert_eq!(xmp.tiff.make, "Canon");
        assert_eq!(xmp.tiff.image_length, 3840);
        assert_eq!(xmp.tiff.x_resolution, Rational::new(240, 1));
        assert_eq!(xmp.tiff.resolution_unit, 2);

        assert_eq!(xmp.dc.format, "image/x-canon-cr2");
        assert_eq!(xmp.dc.creator, vec!["Jane Doe"]);
        assert_eq!(xmp.dc.rights, "Copyright 2017 Jane Doe");
        assert_eq!(xmp.dc.title, "Harbour at dawn");
        assert_eq!(xmp.dc.subject, vec!["harbour", "boats", "dawn"]);

        assert_eq!(xmp.crs.version, "10.1");
        assert_eq!(xmp.crs.temperature, 5250);
        assert_eq!(xmp.crs.tint, 4);
        assert_eq!(xmp.crs.exposure_2012, 0.35);
        assert_eq!(xmp.crs.highlights_2012, -40);
        assert_eq!(xmp.crs.blacks_2012, -7);
        assert!(!xmp.crs.has_crop);
        assert!(xmp.crs.already_applied);
        assert_eq!(xmp.crs.camera_profile, "Adobe Standard");

        assert_eq!(
            xmp.mm.document_id.to_string(),
            "fe607d9b-5fd4-da11-8b77-87757e22306b"
        );
        assert_eq!(
            xmp.mm.instance_id.to_string(),
            "8e3c8e5a-1f2b-4c3d-9e4f-5a6b7c8d9e0f"
        );
        assert_eq!(
            xmp.mm.original_document_id.to_string(),
            "0f3a5c1d-2b7e-4e8f-9a1b-2c3d4e5f6071"
        );
    }

    #[test]
    fn packet_inside_container_noise() {
        let data = embed(LIGHTROOM);
        let embedded = parse(&data[..]).unwrap().unwrap();
        assert_eq!(embedded, parse_str(LIGHTROOM));
    }

    #[test]
    fn absent_packet_is_none() {
        assert!(parse(&b""[..]).unwrap().is_none());
        assert!(parse(&b"\xFF\xD8\xFF\xE0 JFIF no metadata here \xFF\xD9"[..])
            .unwrap()
            .is_none());
        // a near miss is not a root tag
        assert!(parse(&b"<x:xmpmet><x:xmp>"[..]).unwrap().is_none());
    }

    #[test]
    fn one_byte_reads_parse_identically() {
        let data = embed(LIGHTROOM);
        let trickled = XmpReader::new(Trickle(&data)).parse().unwrap().unwrap();
        assert_eq!(trickled, parse_str(LIGHTROOM));
    }

    #[test]
    fn io_errors_carry_their_phase() {
        let err = parse(Broken(io::ErrorKind::BrokenPipe)).unwrap_err();
        match err {
            XmpError::Io { phase, source } => {
                assert_eq!(phase, Phase::RootTag);
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}

mod properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attribute_and_element_forms_are_equivalent() {
        let element = parse_str(&packet("<xmp:Rating>3</xmp:Rating>"));
        let attribute = parse_str(&attribute_packet("xmp:Rating=\"3\""));
        assert_eq!(element.basic.rating, 3);
        assert_eq!(element, attribute);
    }

    #[test]
    fn rating_keeps_out_of_scale_values() {
        assert_eq!(parse_str(&attribute_packet("xmp:Rating=\"-1\"")).basic.rating, -1);
        assert_eq!(parse_str(&attribute_packet("xmp:Rating=\"9\"")).basic.rating, 9);
    }

    #[test]
    fn bag_items_dispatch_in_document_order() {
        let xmp = parse_str(&packet(
            "<dc:subject><rdf:Bag><rdf:li>foo</rdf:li><rdf:li>bar</rdf:li></rdf:Bag></dc:subject>",
        ));
        assert_eq!(xmp.dc.subject, vec!["foo", "bar"]);
    }

    #[test]
    fn unknown_names_do_not_disturb_the_walk() {
        let xmp = parse_str(&packet(
            "<photoshop:ColorMode>3</photoshop:ColorMode>\
             <xmp:Nickname>nick</xmp:Nickname>\
             <lr:hierarchicalSubject><rdf:Bag><rdf:li>a|b</rdf:li></rdf:Bag></lr:hierarchicalSubject>\
             <xmp:Label>Blue</xmp:Label>",
        ));
        assert_eq!(xmp.basic.label, "Blue");
        assert!(xmp.dc.subject.is_empty());
    }

    #[test]
    fn legacy_prefixes_decode_like_current_ones() {
        let xmp = parse_str(&attribute_packet(
            "xap:Rating=\"2\" xapMM:DocumentID=\"uuid:fe607d9b5fd4da118b7787757e22306b\"",
        ));
        assert_eq!(xmp.basic.rating, 2);
        assert_eq!(
            xmp.mm.document_id,
            Uuid::parse(b"fe607d9b-5fd4-da11-8b77-87757e22306b").unwrap()
        );
    }

    #[test]
    fn entities_are_kept_verbatim() {
        let xmp = parse_str(&packet("<xmp:Label>Tom &amp; Jerry</xmp:Label>"));
        assert_eq!(xmp.basic.label, "Tom &amp; Jerry");
    }

    #[test]
    fn values_keep_trailing_whitespace() {
        let xmp = parse_str(&packet("<tiff:Model>\n   EOS R5  </tiff:Model>"));
        assert_eq!(xmp.tiff.model, "EOS R5  ");
    }

    #[test]
    fn comments_between_properties_are_skipped() {
        let xmp = parse_str(&packet(
            "<!-- <xmp:Rating>1</xmp:Rating> --><xmp:Rating>5</xmp:Rating>",
        ));
        assert_eq!(xmp.basic.rating, 5);
    }

    #[test]
    fn processing_instruction_ends_the_walk() {
        let data = "<x:xmpmeta><rdf:RDF><rdf:Description xmp:Label=\"Green\">\
                    <?xpacket end=\"w\"?><xmp:Rating>5</xmp:Rating>";
        let xmp = parse_str(data);
        assert_eq!(xmp.basic.label, "Green");
        assert_eq!(xmp.basic.rating, 0);
    }

    #[test]
    fn bad_values_are_skipped() {
        let xmp = parse_str(&attribute_packet(
            "xmp:CreateDate=\"someday\" xmpMM:InstanceID=\"xmp.iid:123\" xmp:Label=\"Purple\"",
        ));
        assert!(xmp.basic.create_date.is_zero());
        assert!(xmp.mm.instance_id.is_nil());
        assert_eq!(xmp.basic.label, "Purple");
    }
}

mod limits {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn values_grow_the_window_up_to_the_ceiling() {
        let long = "x".repeat(900);
        let data = attribute_packet(&format!("xmp:Label=\"{long}\""));
        let opts = XmpReaderOptions::default()
            .header_block(32)
            .value_block(64)
            .max_window(1024);
        let xmp = XmpReader::with_options(data.as_bytes(), opts)
            .parse()
            .unwrap()
            .unwrap();
        assert_eq!(xmp.basic.label, long);
    }

    #[test]
    fn attribute_value_past_the_ceiling_is_buffer_full() {
        let data = attribute_packet(&format!("xmp:Label=\"{}\"", "x".repeat(2000)));
        let opts = XmpReaderOptions::default().max_window(1024);
        let err = XmpReader::with_options(data.as_bytes(), opts)
            .parse()
            .unwrap_err();
        assert!(matches!(
            err,
            XmpError::BufferFull {
                phase: Phase::AttributeValue,
                limit: 1024
            }
        ));
    }

    fn narrow(header_block: usize, value_block: usize, max_window: usize) -> XmpReaderOptions {
        XmpReaderOptions::default()
            .header_block(header_block)
            .value_block(value_block)
            .max_window(max_window)
    }

    #[test]
    fn long_tag_names_grow_the_window_up_to_the_ceiling() {
        let name = format!("foo:{}", "A".repeat(100));
        let data = packet(&format!(
            "<{name}>x</{name}><xmp:Rating>3</xmp:Rating>"
        ));
        let xmp = XmpReader::with_options(data.as_bytes(), narrow(16, 16, 256))
            .parse()
            .unwrap()
            .unwrap();
        assert_eq!(xmp.basic.rating, 3);
        assert_eq!(xmp, parse_str(&data));
    }

    #[test]
    fn tag_name_past_the_ceiling_is_buffer_full() {
        let name = format!("foo:{}", "A".repeat(400));
        let data = packet(&format!("<{name}>x</{name}>"));
        let err = XmpReader::with_options(data.as_bytes(), narrow(16, 16, 256))
            .parse()
            .unwrap_err();
        assert!(matches!(
            err,
            XmpError::BufferFull {
                phase: Phase::TagHeader,
                limit: 256
            }
        ));
    }

    #[test]
    fn long_attribute_names_grow_the_window_up_to_the_ceiling() {
        let data = attribute_packet(&format!(
            "foo:{}=\"1\" xmp:Rating=\"3\"",
            "B".repeat(100)
        ));
        let xmp = XmpReader::with_options(data.as_bytes(), narrow(16, 16, 256))
            .parse()
            .unwrap()
            .unwrap();
        assert_eq!(xmp.basic.rating, 3);
        assert_eq!(xmp, parse_str(&data));
    }

    #[test]
    fn attribute_name_past_the_ceiling_is_buffer_full() {
        let data = attribute_packet(&format!("foo:{}=\"1\"", "B".repeat(400)));
        let err = XmpReader::with_options(data.as_bytes(), narrow(16, 16, 256))
            .parse()
            .unwrap_err();
        assert!(matches!(
            err,
            XmpError::BufferFull {
                phase: Phase::Attribute,
                limit: 256
            }
        ));
    }

    #[test]
    fn tag_values_grow_the_window_up_to_the_ceiling() {
        let text = "z".repeat(700);
        let data = packet(&format!("<xmp:Label>{text}</xmp:Label>"));
        let xmp = XmpReader::with_options(data.as_bytes(), narrow(32, 64, 1024))
            .parse()
            .unwrap()
            .unwrap();
        assert_eq!(xmp.basic.label, text);
        assert_eq!(xmp, parse_str(&data));
    }

    #[test]
    fn tag_value_past_the_ceiling_is_buffer_full() {
        let data = packet(&format!("<xmp:Label>{}</xmp:Label>", "y".repeat(5000)));
        let opts = XmpReaderOptions::default().max_window(2048);
        let err = XmpReader::with_options(data.as_bytes(), opts)
            .parse()
            .unwrap_err();
        assert_eq!(err.phase(), Phase::TagValue);
        assert!(matches!(err, XmpError::BufferFull { .. }));
    }

    #[test]
    fn padding_never_exhausts_the_window() {
        let padding = " ".repeat(20_000);
        let data = packet(&format!(
            "<xmp:Rating>{padding}2</xmp:Rating>{padding}<xmp:Label>Red</xmp:Label>"
        ));
        let opts = XmpReaderOptions::default()
            .header_block(64)
            .value_block(64)
            .max_window(256);
        let xmp = XmpReader::with_options(data.as_bytes(), opts)
            .parse()
            .unwrap()
            .unwrap();
        assert_eq!(xmp.basic.rating, 2);
        assert_eq!(xmp.basic.label, "Red");
    }

    #[test]
    fn nesting_past_the_depth_limit_is_malformed() {
        let mut body = String::new();
        for _ in 0..100 {
            body.push_str("<a:b>");
        }
        let err = parse(packet(&body).as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            XmpError::Malformed {
                phase: Phase::TagHeader,
                ..
            }
        ));
    }

    #[test]
    fn truncated_packet_is_malformed() {
        let err = parse(&b"<x:xmpmeta><rdf:RDF><rdf:Description xmp:Label=\"Re"[..]).unwrap_err();
        assert!(matches!(
            err,
            XmpError::Malformed {
                phase: Phase::AttributeValue,
                ..
            }
        ));
    }
}

mod logging {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn events_reach_an_injected_logger() {
        let sink: &'static Capture = Box::leak(Box::default());
        let data = attribute_packet("xmp:CreateDate=\"someday\" xmp:Rating=\"1\"");
        let xmp = XmpReader::new(data.as_bytes())
            .with_logger(sink)
            .parse()
            .unwrap()
            .unwrap();
        assert_eq!(xmp.basic.rating, 1);

        let lines = sink.lines.lock().unwrap();
        assert!(lines
            .iter()
            .any(|(level, line)| *level == Level::Debug && line.contains("found XMP root tag")));
        assert!(lines
            .iter()
            .any(|(level, line)| *level == Level::Trace && line.contains("xmp:CreateDate")));
    }

    #[test]
    fn absent_packet_is_logged() {
        let sink: &'static Capture = Box::leak(Box::default());
        let result = XmpReader::new(&b"no packet"[..])
            .with_logger(sink)
            .parse()
            .unwrap();
        assert!(result.is_none());
        let lines = sink.lines.lock().unwrap();
        assert!(lines.iter().any(|(_, line)| line.contains("no XMP root tag")));
    }
}
