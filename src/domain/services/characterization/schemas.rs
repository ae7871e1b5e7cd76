//! Built-in characterization schemas
//!
//! Technical metadata extracted from file content (FITS output). The base
//! schema applies to every generic file; the media schemas add properties
//! for images, documents, audio and video.
//!
//! No property is defined by more than one built-in schema. Properties
//! several media share (dimensions, timing) live in `base`, so any
//! selection of built-in schemas composes under the strict strategy too.

use crate::domain::entities::{EntityType, PropertyDefinition, Schema};
use crate::domain::policies::AlreadyThereStrategy;
use crate::error::{WorksError, WorksResult};

use super::EntityTypeBuilder;

const EBUCORE: &str = "http://www.ebu.ch/metadata/ontologies/ebucore/ebucore#";
const PREMIS: &str = "http://www.loc.gov/premis/rdf/v1#";
const NFO: &str = "http://www.semanticdesktop.org/ontologies/2007/03/22/nfo#";
const EXIF: &str = "http://www.w3.org/2003/12/exif/ns#";
const FITS: &str = "http://projecthydra.org/ns/fits/";
const DC: &str = "http://purl.org/dc/terms/";

/// Names of the built-in schemas
pub const SCHEMA_NAMES: [&str; 5] = ["base", "image", "document", "audio", "video"];

fn prop(name: &str, namespace: &str, term: &str) -> PropertyDefinition {
    PropertyDefinition::new(name, format!("{}{}", namespace, term))
}

/// Properties every characterized file carries
pub fn base_schema() -> Schema {
    Schema::new("base")
        .property(prop("format_label", PREMIS, "hasFormatName"))
        .property(prop("file_size", EBUCORE, "fileSize").single())
        .property(prop("well_formed", FITS, "wellFormed").single())
        .property(prop("valid", FITS, "valid").single())
        .property(prop("date_created", EBUCORE, "dateCreated").single())
        .property(prop("fits_version", FITS, "fitsVersion").single())
        .property(prop("exif_version", EXIF, "exifVersion").single())
        .property(prop("original_checksum", NFO, "hashValue"))
        .property(prop("mime_type", EBUCORE, "hasMimeType").single())
        .property(prop("file_title", DC, "title"))
        .property(prop("file_author", DC, "creator"))
        .property(prop("page_count", PREMIS, "hasPageCount").single())
        .property(prop("height", EBUCORE, "height").single())
        .property(prop("width", EBUCORE, "width").single())
        .property(prop("duration", EBUCORE, "duration").single())
        .property(prop("frame_rate", EBUCORE, "frameRate").single())
        .property(prop("sample_rate", EBUCORE, "sampleRate").single())
        .property(prop("bit_rate", EBUCORE, "bitRate").single())
}

/// Image technical metadata
pub fn image_schema() -> Schema {
    Schema::new("image")
        .property(prop("byte_order", EXIF, "byteOrder").single())
        .property(prop("compression", EBUCORE, "compressionType").single())
        .property(prop("color_space", EXIF, "colorSpace").single())
        .property(prop("profile_name", FITS, "profileName").single())
        .property(prop("profile_version", FITS, "profileVersion").single())
        .property(prop("orientation", EXIF, "orientation").single())
        .property(prop("color_map", FITS, "colorMap"))
        .property(prop("image_producer", FITS, "imageProducer"))
        .property(prop("capture_device", FITS, "captureDevice"))
        .property(prop("scanning_software", FITS, "scanningSoftware"))
        .property(prop("gps_timestamp", EXIF, "gpsTimeStamp").single())
        .property(prop("latitude", EXIF, "gpsLatitude").single())
        .property(prop("longitude", EXIF, "gpsLongitude").single())
}

/// Document technical metadata
pub fn document_schema() -> Schema {
    Schema::new("document")
        .property(prop("creator", DC, "creator"))
        .property(prop("language", DC, "language"))
        .property(prop("word_count", FITS, "wordCount").single())
        .property(prop("character_count", FITS, "characterCount").single())
        .property(prop("line_count", FITS, "lineCount").single())
        .property(prop("table_count", FITS, "tableCount").single())
        .property(prop("graphics_count", FITS, "graphicsCount").single())
}

/// Audio technical metadata
pub fn audio_schema() -> Schema {
    Schema::new("audio")
        .property(prop("bit_depth", EBUCORE, "bitDepth").single())
        .property(prop("channels", EBUCORE, "audioChannelNumber").single())
        .property(prop("data_format", EBUCORE, "hasDataFormat").single())
        .property(prop("offset", EBUCORE, "start").single())
        .property(prop("audio_codec", EBUCORE, "hasAudioCodec").single())
}

/// Video technical metadata
pub fn video_schema() -> Schema {
    Schema::new("video")
        .property(prop("aspect_ratio", EBUCORE, "aspectRatio").single())
        .property(prop("video_codec", EBUCORE, "hasVideoCodec").single())
        .property(prop("scan_type", EBUCORE, "scanningFormat").single())
}

/// Look up a built-in schema by name
pub fn schema_by_name(name: &str) -> WorksResult<Schema> {
    match name.trim().to_lowercase().as_str() {
        "base" => Ok(base_schema()),
        "image" => Ok(image_schema()),
        "document" => Ok(document_schema()),
        "audio" => Ok(audio_schema()),
        "video" => Ok(video_schema()),
        _ => Err(WorksError::UnknownSchema {
            name: name.to_string(),
        }),
    }
}

/// The generic-file type with every built-in schema applied
pub fn characterization_type() -> WorksResult<EntityType> {
    let strategy = AlreadyThereStrategy;
    let mut builder = EntityTypeBuilder::new("GenericFile");
    for name in SCHEMA_NAMES {
        builder = builder.apply(&schema_by_name(name)?, &strategy)?;
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policies::StrictStrategy;

    #[test]
    fn every_named_schema_resolves() {
        for name in SCHEMA_NAMES {
            assert_eq!(schema_by_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn unknown_schema_errors() {
        assert_eq!(
            schema_by_name("hologram"),
            Err(WorksError::UnknownSchema {
                name: "hologram".to_string()
            })
        );
    }

    #[test]
    fn built_in_schemas_define_disjoint_properties() {
        let mut seen: Vec<(String, &str)> = Vec::new();
        for name in SCHEMA_NAMES {
            let schema = schema_by_name(name).unwrap();
            for property in schema.properties() {
                if let Some((_, owner)) = seen.iter().find(|(n, _)| *n == property.name) {
                    panic!("{} defined by both {} and {}", property.name, owner, name);
                }
                seen.push((property.name.clone(), name));
            }
        }
    }

    #[test]
    fn strict_strategy_composes_every_built_in_schema() {
        let mut builder = EntityTypeBuilder::new("GenericFile");
        for name in SCHEMA_NAMES {
            builder = builder
                .apply(&schema_by_name(name).unwrap(), &StrictStrategy)
                .unwrap();
        }
        let strict = builder.build();
        assert_eq!(
            strict.property_names(),
            characterization_type().unwrap().property_names()
        );
    }

    #[test]
    fn characterization_type_includes_every_schema() {
        let ty = characterization_type().unwrap();
        assert_eq!(ty.name(), "GenericFile");
        assert!(ty.has_property("mime_type"));
        assert!(ty.has_property("height"));
        assert!(ty.has_property("compression"));
        assert!(ty.has_property("word_count"));
        assert!(ty.has_property("channels"));
        assert!(ty.has_property("aspect_ratio"));
    }
}
