//! Conversion of flashback results into grid tiles for the Slint model.

use crate::config::{THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};
use crate::services::Flashback;
use crate::thumbnail_cache::Thumbnail;
use crate::ui::grid_layout::GridPlacement;
use image::imageops::{self, FilterType};
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};

/// Scales a cached frame to tile size and wraps it as a Slint image.
pub fn create_slint_image(thumbnail: &Thumbnail) -> Image {
    let scaled = imageops::resize(
        &thumbnail.frame,
        THUMBNAIL_WIDTH,
        THUMBNAIL_HEIGHT,
        FilterType::Triangle,
    );
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(
        scaled.as_raw(),
        scaled.width(),
        scaled.height(),
    );
    Image::from_rgb8(buffer)
}

/// Pairs each flashback with its placed cell.
///
/// A tile refers back to its video by position in `flashbacks`.
pub fn build_tiles(flashbacks: &[Flashback], placement: &GridPlacement) -> Vec<crate::VideoTile> {
    flashbacks
        .iter()
        .zip(&placement.cells)
        .enumerate()
        .map(|(index, (flashback, &(row, column)))| crate::VideoTile {
            thumbnail: create_slint_image(&flashback.thumbnail),
            label: flashback.label().into(),
            index: index as i32,
            row: row as i32,
            column: column as i32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::grid_layout::plan;
    use image::RgbImage;
    use std::path::PathBuf;
    use std::rc::Rc;

    fn flashback(name: &str, years_ago: i32) -> Flashback {
        let path = PathBuf::from("/videos").join(name);
        Flashback {
            years_ago,
            path: path.clone(),
            thumbnail: Rc::new(Thumbnail {
                path,
                frame: RgbImage::new(640, 360),
            }),
        }
    }

    #[test]
    fn tiles_follow_placement() {
        let flashbacks: Vec<Flashback> = (1..=4)
            .map(|i| flashback(&format!("clip{}.mp4", i), i))
            .collect();
        let placement = plan(450.0, 210.0, flashbacks.len());

        let tiles = build_tiles(&flashbacks, &placement);

        let cells: Vec<(i32, i32)> = tiles.iter().map(|t| (t.row, t.column)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(tiles[2].label.as_str(), "3 year(s) ago");
        let indices: Vec<i32> = tiles.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn thumbnails_are_scaled_to_tile_size() {
        let image = create_slint_image(&flashback("wide.mp4", 1).thumbnail);
        let size = image.size();
        assert_eq!((size.width, size.height), (THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT));
    }
}
