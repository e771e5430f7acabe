#![doc = r#"
TILERY — an image tiling and letterboxing engine.

This crate composes a heterogeneous collection of raster images (arbitrary
resolutions and aspect ratios) into a single mosaic image arranged in a grid.
Every image is brought to a common tile size by letterboxing — resizing to
fit while preserving its aspect ratio, then padding with a solid color — and
tiles can optionally carry rendered text titles. It powers the TILERY CLI and
can be embedded in your own Rust applications.

Stability
---------
The public library API is experimental in initial releases. It is robust and
exercised by the CLI, but may evolve as the crate stabilizes. Breaking
changes can occur.

Quick start: compose a mosaic in memory
---------------------------------------
```rust
use tilery::{Color, ImageForm, Raster, TilesParams, create_tiles};

fn main() -> tilery::Result<()> {
    let images = vec![
        ImageForm::Raster(Raster::solid(640, 480, Color::rgb(200, 30, 30))),
        ImageForm::Raster(Raster::solid(480, 640, Color::rgb(30, 200, 30))),
        ImageForm::Raster(Raster::solid(512, 512, Color::rgb(30, 30, 200))),
    ];

    let mosaic = create_tiles(images, &TilesParams::default())?.into_raster();
    assert!(mosaic.width() > 0 && mosaic.height() > 0);
    Ok(())
}
```

Grids, margins, and titles
--------------------------
```rust
use tilery::{Color, ImageForm, Raster, TilesParams, TitlePlacement, create_tiles};

fn main() -> tilery::Result<()> {
    let images: Vec<ImageForm> = (0..5)
        .map(|i| ImageForm::Raster(Raster::solid(320, 240, Color::rgb(40 * i, 0, 0))))
        .collect();

    let params = TilesParams {
        grid_size: (Some(2), None), // columns negotiated from the image count
        tile_margin: 4,
        titles: Some(vec![Some("camera 1".to_string()), Some("camera 2".to_string())]),
        default_title_placement: TitlePlacement::Bottom,
        ..TilesParams::default()
    };

    let mosaic = create_tiles(images, &params)?;
    drop(mosaic);
    Ok(())
}
```

Saving tiles with the image sink
--------------------------------
```rust,no_run
use std::path::Path;
use tilery::{Color, ImageSink, NamePattern, Raster};

fn main() -> tilery::Result<()> {
    let mut sink = ImageSink::open(Path::new("frames"), true, NamePattern::default())?;
    for shade in 0..10 {
        let frame = Raster::solid(64, 64, Color::rgb(shade * 25, 0, 0));
        sink.save_image(&frame, None)?; // frames/image_00000.png, ...
    }
    Ok(())
}
```

Error handling
--------------
All public functions return [`Result`]; match on [`Error`] to handle
specific cases, e.g. empty inputs or a grid too small for the collection.

```rust
use tilery::{Error, TilesParams, create_tiles};

match create_tiles(vec![], &TilesParams::default()) {
    Err(Error::EmptyInput) => {}
    other => panic!("unexpected: {:?}", other.err()),
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — processing primitives (resize, letterbox, grid, text, compose).
- [`raster`] — the `Raster`/`Color`/`Point` data model and `ImageForm`.
- [`io`] — image loading and the directory-backed sink.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod raster;
pub mod types;
pub mod utils;

// Curated public API surface
// Types
pub use crate::core::params::{TilesParams, TitleAnchors};
pub use crate::error::{Error, Result};
pub use crate::raster::{Color, ImageForm, Point, Raster};
pub use crate::types::{ImageFormat, OutputEncoding, TileScaling, TitleFont, TitlePlacement};

// Processing primitives
pub use crate::core::processing::compose::compose_tiles;
pub use crate::core::processing::grid::{
    aggregate_tile_size, establish_grid_size, negotiate_grid_size,
};
pub use crate::core::processing::letterbox::letterbox_image;
pub use crate::core::processing::ops::{crop_image, place_image};
pub use crate::core::processing::resize::{resize_keeping_aspect_ratio, resize_scaled};
pub use crate::core::processing::text::{TitleStyle, draw_title, optimal_text_scale};

// I/O helpers
pub use crate::io::loader::{load_image, load_images_from_dir};
pub use crate::io::sink::{ImageSink, NamePattern};

// High-level API re-exports
pub use crate::api::{create_tiles, negotiate_tiles_format};
