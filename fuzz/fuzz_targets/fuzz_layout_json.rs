#![no_main]

use std::sync::OnceLock;

use glyphmix_backend_raster::{extract_glyphs, measure, GlyphCache, Raster, Rgba};
use glyphmix_core::catalog::Glyph;
use glyphmix_core::layout::ExportLayout;
use libfuzzer_sys::fuzz_target;

fn cache() -> &'static GlyphCache {
    static CACHE: OnceLock<GlyphCache> = OnceLock::new();
    CACHE.get_or_init(|| {
        extract_glyphs(&Raster::new(436, 3, Rgba::rgb(255, 255, 255)))
            .expect("fixed logo covers every glyph")
    })
}

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(layout) = ExportLayout::from_json(json) else {
        return;
    };

    for len in 1..=7 {
        let sequence = vec![Glyph::Ya; len];
        if let Ok(composition) = measure(&sequence, cache(), &layout) {
            for p in &composition.placements {
                assert!(p.x + p.width <= composition.width);
                assert!(p.y + p.height <= composition.height);
            }
        }
    }
});
