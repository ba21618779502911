//! Decoders for the IDX binary format used by MNIST and its derivatives.
//!
//! # IDX3 image file layout
//! ```text
//! bytes  0-3:   magic 0x00000803 (uint8 data, 3 dimensions)
//! bytes  4-7:   N     (number of images, big-endian u32)
//! bytes  8-11:  rows  (image height in pixels, big-endian u32)
//! bytes 12-15:  cols  (image width in pixels, big-endian u32)
//! bytes 16..:   N * rows * cols bytes, row-major, uint8
//! ```
//!
//! # IDX1 label file layout
//! ```text
//! bytes  0-3:   magic 0x00000801 (uint8 data, 1 dimension)
//! bytes  4-7:   N     (number of labels, big-endian u32)
//! bytes  8..:   N bytes, each a class index in [0, n_classes)
//! ```
//!
//! The `load_*` functions read gzip-compressed files as distributed; the
//! `parse_*` functions take an already-decompressed stream.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};
use flate2::read::GzDecoder;

use crate::error::DataError;
use crate::math::Vector;

pub const LABEL_MAGIC: u32 = 0x0000_0801;
pub const IMAGE_MAGIC: u32 = 0x0000_0803;

/// Reads a gzip-compressed IDX3 image file.
pub fn load_images<P: AsRef<Path>>(path: P) -> Result<Vec<Vector>, DataError> {
    let images = parse_images(open_gz(path.as_ref())?)?;
    log::info!("loaded {} images from {}", images.len(), path.as_ref().display());
    Ok(images)
}

/// Reads a gzip-compressed IDX1 label file as one-hot vectors.
pub fn load_labels<P: AsRef<Path>>(path: P, n_classes: usize) -> Result<Vec<Vector>, DataError> {
    let labels = parse_labels(open_gz(path.as_ref())?, n_classes)?;
    log::info!("loaded {} labels from {}", labels.len(), path.as_ref().display());
    Ok(labels)
}

/// Decodes an IDX3 image stream. Each image becomes a vector of
/// `rows * cols` pixels scaled from `[0, 255]` to `[0.0, 1.0]`.
pub fn parse_images<R: Read>(mut reader: R) -> Result<Vec<Vector>, DataError> {
    let magic = read_header_word(&mut reader, "image magic number")?;
    if magic != IMAGE_MAGIC {
        return Err(DataError::Format(format!(
            "IDX image file: magic number must be {IMAGE_MAGIC:#010x}, got {magic:#010x}"
        )));
    }

    let count = read_header_word(&mut reader, "image count")? as usize;
    let rows = read_header_word(&mut reader, "row count")? as usize;
    let cols = read_header_word(&mut reader, "column count")? as usize;
    let n_pixels = rows.checked_mul(cols).ok_or_else(|| {
        DataError::Format(format!(
            "IDX image file: rows * cols overflows usize (rows={rows}, cols={cols})"
        ))
    })?;

    let mut pixels = vec![0u8; n_pixels];
    let mut images = Vec::new();
    for idx in 0..count {
        reader.read_exact(&mut pixels).map_err(|e| {
            truncated(e, format!("IDX image file: data ends at image {idx} of {count}"))
        })?;
        images.push(pixels.iter().map(|&px| px as f64 / 255.0).collect());
    }

    Ok(images)
}

/// Decodes an IDX1 label stream into one-hot vectors of length `n_classes`.
pub fn parse_labels<R: Read>(mut reader: R, n_classes: usize) -> Result<Vec<Vector>, DataError> {
    if n_classes == 0 {
        return Err(DataError::Format("n_classes must be at least 1".to_owned()));
    }

    let magic = read_header_word(&mut reader, "label magic number")?;
    if magic != LABEL_MAGIC {
        return Err(DataError::Format(format!(
            "IDX label file: magic number must be {LABEL_MAGIC:#010x}, got {magic:#010x}"
        )));
    }

    let count = read_header_word(&mut reader, "label count")? as usize;
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    if raw.len() < count {
        return Err(DataError::Format(format!(
            "IDX label file: header declares {count} labels but only {} follow",
            raw.len()
        )));
    }

    raw[..count]
        .iter()
        .enumerate()
        .map(|(idx, &label)| {
            let class = label as usize;
            if class >= n_classes {
                return Err(DataError::Format(format!(
                    "IDX label at index {idx}: class {class} is out of range for n_classes={n_classes}"
                )));
            }
            let mut one_hot = Vector::zeros(n_classes);
            one_hot[class] = 1.0;
            Ok(one_hot)
        })
        .collect()
}

fn open_gz(path: &Path) -> Result<GzDecoder<BufReader<File>>, DataError> {
    let file = File::open(path)?;
    Ok(GzDecoder::new(BufReader::new(file)))
}

fn read_header_word<R: Read>(reader: &mut R, what: &str) -> Result<u32, DataError> {
    reader
        .read_u32::<BigEndian>()
        .map_err(|e| truncated(e, format!("IDX header ends before the {what}")))
}

fn truncated(e: std::io::Error, msg: String) -> DataError {
    if e.kind() == ErrorKind::UnexpectedEof {
        DataError::Format(msg)
    } else {
        DataError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use ndarray::array;
    use std::io::Write;

    fn image_bytes(count: u32, rows: u32, cols: u32, pixels: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for word in [IMAGE_MAGIC, count, rows, cols] {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
        bytes.extend_from_slice(pixels);
        bytes
    }

    fn label_bytes(labels: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&LABEL_MAGIC.to_be_bytes());
        bytes.extend_from_slice(&(labels.len() as u32).to_be_bytes());
        bytes.extend_from_slice(labels);
        bytes
    }

    #[test]
    fn parses_images_and_normalizes_pixels() {
        let bytes = image_bytes(2, 1, 2, &[0, 255, 51, 102]);
        let images = parse_images(bytes.as_slice()).unwrap();
        assert_eq!(images, vec![array![0.0, 1.0], array![0.2, 0.4]]);
    }

    #[test]
    fn parses_labels_as_one_hot() {
        let labels = parse_labels(label_bytes(&[2, 0]).as_slice(), 3).unwrap();
        assert_eq!(labels, vec![array![0., 0., 1.], array![1., 0., 0.]]);
    }

    #[test]
    fn rejects_wrong_magic() {
        let err = parse_images(label_bytes(&[1]).as_slice()).unwrap_err();
        assert!(err.to_string().contains("magic number"));

        let err = parse_labels(image_bytes(0, 1, 1, &[]).as_slice(), 10).unwrap_err();
        assert!(err.to_string().contains("magic number"));
    }

    #[test]
    fn rejects_truncated_images() {
        let bytes = image_bytes(2, 2, 2, &[1, 2, 3, 4, 5]);
        let err = parse_images(bytes.as_slice()).unwrap_err();
        assert!(matches!(err, DataError::Format(_)));
        assert!(err.to_string().contains("image 1 of 2"));
    }

    #[test]
    fn rejects_truncated_header() {
        let err = parse_images(&IMAGE_MAGIC.to_be_bytes()[..]).unwrap_err();
        assert!(matches!(err, DataError::Format(_)));
    }

    #[test]
    fn rejects_out_of_range_label() {
        let err = parse_labels(label_bytes(&[0, 10]).as_slice(), 10).unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn loads_gzip_files() {
        let dir = std::env::temp_dir().join(format!("tinynet-idx-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("labels-idx1-ubyte.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&label_bytes(&[1, 1, 0])).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let labels = load_labels(&path, 2).unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[2], array![1., 0.]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
