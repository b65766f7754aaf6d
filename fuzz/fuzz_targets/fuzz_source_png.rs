#![no_main]

use glyphmix_backend_raster::LogoWidget;
use glyphmix_core::layout::ExportLayout;
use glyphmix_core::rng::DeterministicRng;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut rng = DeterministicRng::new(0);
    let mut widget = LogoWidget::new(ExportLayout::default());
    if widget.load_png(data, &mut rng).is_ok() {
        let _ = widget.export();
    }
});
