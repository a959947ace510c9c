//! C ABI for the forest fire automaton
//!
//! Hosts (game engines, SDL front-ends, scripting runtimes) create an opaque
//! `ForestSimInstance`, advance it with `forest_sim_tick` and read cell
//! statuses back for drawing. Every fallible call returns a
//! `ForestSimErrorCode`; details are available from `forest_sim_get_last_error`.
//! The C header is generated by `build.rs` into `ForestFireFFI.h`.

mod error;
mod helpers;
mod instance;
mod queries;
mod simulation;

pub use error::{forest_sim_get_last_error, forest_sim_get_last_error_code, ForestSimErrorCode};
pub use instance::{
    forest_sim_default_config, forest_sim_destroy, forest_sim_new, ForestSimConfig,
    ForestSimInstance,
};
pub use queries::{
    forest_sim_cols, forest_sim_copy_statuses, forest_sim_get_position, forest_sim_get_stats,
    forest_sim_get_status, forest_sim_rows, ForestSimStats,
};
pub use simulation::{forest_sim_ignite, forest_sim_set_status, forest_sim_tick};

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;
    use std::ptr;

    fn seeded_config(rows: usize, cols: usize) -> ForestSimConfig {
        ForestSimConfig {
            rows,
            cols,
            has_seed: true,
            seed: 42,
            ..forest_sim_default_config()
        }
    }

    fn create(config: ForestSimConfig) -> *mut ForestSimInstance {
        let mut sim = ptr::null_mut();
        let code = unsafe { forest_sim_new(config, &mut sim) };
        assert_eq!(code, ForestSimErrorCode::Ok);
        assert!(!sim.is_null());
        sim
    }

    fn last_error_message() -> String {
        let msg = forest_sim_get_last_error();
        assert!(!msg.is_null());
        unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned()
    }

    #[test]
    fn test_create_query_destroy() {
        let sim = create(seeded_config(8, 12));
        unsafe {
            assert_eq!(forest_sim_rows(sim), 8);
            assert_eq!(forest_sim_cols(sim), 12);

            let mut stats = ForestSimStats::default();
            assert_eq!(forest_sim_get_stats(sim, &mut stats), ForestSimErrorCode::Ok);
            assert_eq!(stats.young, 96);
            assert_eq!(stats.tick, 0);

            forest_sim_destroy(sim);
        }
    }

    #[test]
    fn test_invalid_config_reports_error() {
        let mut sim = ptr::null_mut();
        let code = unsafe { forest_sim_new(seeded_config(0, 4), &mut sim) };
        assert_eq!(code, ForestSimErrorCode::InvalidConfig);
        assert!(sim.is_null());
        assert_eq!(forest_sim_get_last_error_code(), ForestSimErrorCode::InvalidConfig);
        assert!(last_error_message().contains("rows"));

        let huge_cells = ForestSimConfig {
            cell_size: u32::MAX / 2 + 1,
            ..seeded_config(3, 3)
        };
        let code = unsafe { forest_sim_new(huge_cells, &mut sim) };
        assert_eq!(code, ForestSimErrorCode::InvalidConfig);
        assert!(sim.is_null());
        assert!(last_error_message().contains("Cell size"));

        let bad_mode = ForestSimConfig {
            update_mode: 9,
            ..seeded_config(4, 4)
        };
        let code = unsafe { forest_sim_new(bad_mode, &mut sim) };
        assert_eq!(code, ForestSimErrorCode::InvalidParameter);
    }

    #[test]
    fn test_null_pointers() {
        unsafe {
            assert_eq!(
                forest_sim_new(seeded_config(2, 2), ptr::null_mut()),
                ForestSimErrorCode::NullPointer
            );
            assert_eq!(forest_sim_tick(ptr::null(), 1), ForestSimErrorCode::NullPointer);
            assert_eq!(forest_sim_rows(ptr::null()), 0);
            forest_sim_destroy(ptr::null_mut());
        }
    }

    #[test]
    fn test_ignite_and_read_status() {
        let sim = create(seeded_config(5, 5));
        unsafe {
            assert_eq!(forest_sim_ignite(sim, 2, 3), ForestSimErrorCode::Ok);

            let mut status = 0u8;
            assert_eq!(forest_sim_get_status(sim, 2, 3, &mut status), ForestSimErrorCode::Ok);
            assert_eq!(status, 2);

            assert_eq!(forest_sim_ignite(sim, 5, 0), ForestSimErrorCode::OutOfBounds);
            assert!(last_error_message().contains("outside"));
            assert_eq!(
                forest_sim_get_status(sim, 0, 9, &mut status),
                ForestSimErrorCode::OutOfBounds
            );
            assert_eq!(forest_sim_set_status(sim, 0, 0, 6), ForestSimErrorCode::InvalidParameter);

            forest_sim_destroy(sim);
        }
    }

    #[test]
    fn test_render_positions_follow_cell_size() {
        let sim = create(ForestSimConfig {
            cell_size: 8,
            ..seeded_config(4, 6)
        });
        unsafe {
            let (mut x, mut y) = (u32::MAX, u32::MAX);
            assert_eq!(forest_sim_get_position(sim, 3, 5, &mut x, &mut y), ForestSimErrorCode::Ok);
            assert_eq!((x, y), (40, 24));

            assert_eq!(forest_sim_get_position(sim, 0, 0, &mut x, &mut y), ForestSimErrorCode::Ok);
            assert_eq!((x, y), (0, 0));

            assert_eq!(
                forest_sim_get_position(sim, 4, 0, &mut x, &mut y),
                ForestSimErrorCode::OutOfBounds
            );
            assert_eq!(
                forest_sim_get_position(sim, 0, 0, ptr::null_mut(), &mut y),
                ForestSimErrorCode::NullPointer
            );

            forest_sim_destroy(sim);
        }
    }

    #[test]
    fn test_tick_and_copy_statuses() {
        let sim = create(seeded_config(3, 4));
        unsafe {
            assert_eq!(forest_sim_set_status(sim, 0, 0, 5), ForestSimErrorCode::Ok);
            assert_eq!(forest_sim_tick(sim, 10), ForestSimErrorCode::Ok);

            let mut buffer = [u8::MAX; 12];
            let mut written = 0usize;
            assert_eq!(
                forest_sim_copy_statuses(sim, buffer.as_mut_ptr(), buffer.len(), &mut written),
                ForestSimErrorCode::Ok
            );
            assert_eq!(written, 12);
            assert!(buffer.iter().all(|&b| b <= 5));

            let mut small = [0u8; 4];
            assert_eq!(
                forest_sim_copy_statuses(sim, small.as_mut_ptr(), small.len(), &mut written),
                ForestSimErrorCode::InvalidParameter
            );

            let mut stats = ForestSimStats::default();
            assert_eq!(forest_sim_get_stats(sim, &mut stats), ForestSimErrorCode::Ok);
            assert_eq!(stats.tick, 10);
            assert_eq!(
                stats.young + stats.mature + stats.start_burning + stats.burning + stats.end_burning + stats.ashes,
                12
            );

            forest_sim_destroy(sim);
        }
    }
}
