//! Single-image helpers: bounding-box crop and clipped in-place scene
//! placement.
use ndarray::s;

use crate::error::{Error, Result};
use crate::raster::Raster;

/// Crop `raster` to the `(x1, y1, x2, y2)` bounding box. Coordinates are
/// rounded to whole pixels and clamped to the raster bounds; an empty
/// region after clamping is an input error.
pub fn crop_image(raster: &Raster, xyxy: [f64; 4]) -> Result<Raster> {
    let clamp = |value: f64, limit: usize| (value.round() as i64).clamp(0, limit as i64) as usize;
    let x1 = clamp(xyxy[0], raster.width());
    let y1 = clamp(xyxy[1], raster.height());
    let x2 = clamp(xyxy[2], raster.width());
    let y2 = clamp(xyxy[3], raster.height());
    if x2 <= x1 || y2 <= y1 {
        return Err(Error::InvalidArgument {
            arg: "xyxy",
            value: format!("{:?}", xyxy),
        });
    }
    let cropped = raster.data().slice(s![y1..y2, x1..x2, ..]).to_owned();
    Ok(Raster::from_array(cropped))
}

/// Paste `image` into `scene` with its top-left corner at `anchor`,
/// mutating `scene` in place. Placements partially outside the scene are
/// clipped; placements fully outside leave the scene unchanged.
pub fn place_image(scene: &mut Raster, image: &Raster, anchor: (i64, i64)) {
    let (scene_width, scene_height) = (scene.width() as i64, scene.height() as i64);
    let (image_width, image_height) = (image.width() as i64, image.height() as i64);
    let (anchor_x, anchor_y) = anchor;

    let out_horizontally = anchor_x + image_width <= 0 || anchor_x >= scene_width;
    let out_vertically = anchor_y + image_height <= 0 || anchor_y >= scene_height;
    if out_horizontally || out_vertically {
        return;
    }

    let start_x = anchor_x.max(0);
    let start_y = anchor_y.max(0);
    let end_x = (anchor_x + image_width).min(scene_width);
    let end_y = (anchor_y + image_height).min(scene_height);

    let crop_start_x = (-anchor_x).max(0);
    let crop_start_y = (-anchor_y).max(0);
    let crop_end_x = crop_start_x + (end_x - start_x);
    let crop_end_y = crop_start_y + (end_y - start_y);

    scene
        .data_mut()
        .slice_mut(s![
            start_y as usize..end_y as usize,
            start_x as usize..end_x as usize,
            ..
        ])
        .assign(&image.data().slice(s![
            crop_start_y as usize..crop_end_y as usize,
            crop_start_x as usize..crop_end_x as usize,
            ..
        ]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Color;

    #[test]
    fn crop_extracts_the_rounded_box() {
        let mut raster = Raster::solid(10, 10, Color::rgb(0, 0, 0));
        raster.fill_rect(2, 3, 4, 5, Color::rgb(9, 9, 9));
        let cropped = crop_image(&raster, [2.2, 2.8, 5.9, 8.1]).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (4, 5));
        assert_eq!(cropped.data()[[0, 0, 0]], 9);
    }

    #[test]
    fn crop_clamps_out_of_range_coordinates() {
        let raster = Raster::solid(10, 10, Color::rgb(5, 5, 5));
        let cropped = crop_image(&raster, [-3.0, -3.0, 30.0, 4.0]).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (10, 4));
    }

    #[test]
    fn crop_of_empty_region_fails() {
        let raster = Raster::solid(10, 10, Color::rgb(5, 5, 5));
        assert!(crop_image(&raster, [6.0, 6.0, 6.0, 8.0]).is_err());
        assert!(crop_image(&raster, [20.0, 0.0, 30.0, 8.0]).is_err());
    }

    #[test]
    fn place_pastes_inside_the_scene() {
        let mut scene = Raster::solid(8, 8, Color::rgb(0, 0, 0));
        let patch = Raster::solid(2, 2, Color::rgb(7, 7, 7));
        place_image(&mut scene, &patch, (3, 4));
        assert_eq!(scene.data()[[4, 3, 0]], 7);
        assert_eq!(scene.data()[[5, 4, 0]], 7);
        assert_eq!(scene.data()[[3, 3, 0]], 0);
    }

    #[test]
    fn place_clips_partial_overlap() {
        let mut scene = Raster::solid(4, 4, Color::rgb(0, 0, 0));
        let patch = Raster::solid(3, 3, Color::rgb(9, 9, 9));
        place_image(&mut scene, &patch, (-1, -1));
        assert_eq!(scene.data()[[0, 0, 0]], 9);
        assert_eq!(scene.data()[[1, 1, 0]], 9);
        assert_eq!(scene.data()[[2, 2, 0]], 0);
    }

    #[test]
    fn place_fully_outside_is_a_no_op() {
        let mut scene = Raster::solid(4, 4, Color::rgb(1, 1, 1));
        let before = scene.clone();
        let patch = Raster::solid(2, 2, Color::rgb(9, 9, 9));
        place_image(&mut scene, &patch, (10, 0));
        place_image(&mut scene, &patch, (0, -5));
        assert_eq!(scene, before);
    }
}
