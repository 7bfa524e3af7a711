//! Sky command.
//!
//! Casts one ray per pixel from a camera at the origin and blends white into
//! light blue by the ray's height.

use crate::OutputArgs;
use anyhow::Result;
use ray_core::render;
use tracing::{debug, info, trace};

/// Runs the sky command.
pub fn run(args: &OutputArgs, verbose: u8) -> Result<()> {
    trace!(width = args.width, height = args.height, "sky::run");

    let aspect = args.width as f32 / args.height as f32;
    debug!(aspect, "Rendering sky");

    let image = render::sky(args.width, args.height);
    super::save_image(&args.output, &image)?;

    info!(output = %args.output.display(), width = args.width, height = args.height, "Wrote sky");
    if verbose > 0 {
        println!("{}x{} sky -> {}", args.width, args.height, args.output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let args = OutputArgs {
            width: 9,
            height: 4,
            output: dir.path().join("img.png"),
        };

        run(&args, 0).unwrap();
        assert!(args.output.is_file());
    }

    #[test]
    fn test_run_missing_extension() {
        let dir = tempfile::tempdir().unwrap();
        let args = OutputArgs {
            width: 2,
            height: 2,
            output: dir.path().join("img"),
        };

        assert!(run(&args, 0).is_err());
    }
}
