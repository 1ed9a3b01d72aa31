//! Runs a top success toast and a bottom error toast in real time and logs
//! every state change.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p toasty --example timeline
//! ```

use std::thread;
use std::time::Instant;

use toasty::{
    HapticError, HapticPattern, Toast, ToastConfig, ToastController, ToastEdge, ToastFrame, Toaster,
};

const SCREEN_WIDTH: f32 = 360.0;

fn main() {
    env_logger::init();

    let mut toaster = Toaster::new();

    let saved = toaster
        .start(
            Toast::new(ToastConfig::success("Uploaded successfully").with_show_icon(true))
                .on_state_change(|state| log::info!("top    {state:?}"))
                .on_complete(|| log::info!("top    dismissed")),
        )
        .expect("hold duration is positive");

    let failed = toaster
        .start(
            Toast::new(
                ToastConfig::error("Oops, an error occurred. Try again later")
                    .with_edge(ToastEdge::Bottom)
                    .with_show_icon(true),
            )
            .haptics(|pattern: &HapticPattern| -> Result<(), HapticError> {
                log::info!("bottom buzz {:?}", pattern.timings_ms);
                Ok(())
            })
            .on_state_change(|state| log::info!("bottom {state:?}"))
            .on_complete(|| log::info!("bottom dismissed")),
        )
        .expect("hold duration is positive");

    log::info!("started {saved:?} and {failed:?}");
    let began = Instant::now();
    for id in [saved, failed] {
        if let Some(due) = toaster.get(id).map(ToastController::scheduled_completion) {
            log::info!("{id:?} completes in {:?}", due.saturating_duration_since(began));
        }
    }

    let mut renderer = |frame: &ToastFrame<'_>| {
        log::trace!(
            "paint {:>6.1}x{:<5.1} offset {:>6.1} {:?}",
            frame.size.x,
            frame.size.y,
            frame.offset,
            frame.shape
        );
    };

    while toaster.is_animating() {
        toaster.begin_frame();
        toaster.paint(SCREEN_WIDTH, &mut renderer);

        // ~60 fps, but never oversleep a phase boundary
        let frame_end = Instant::now() + std::time::Duration::from_millis(16);
        let wake = toaster
            .next_deadline()
            .map_or(frame_end, |deadline| deadline.min(frame_end));
        thread::sleep(wake.saturating_duration_since(Instant::now()));
    }

    log::info!("all toasts settled after {:?}", began.elapsed());
}
