//! Gradient command: red across, green up.

use crate::OutputArgs;
use anyhow::Result;
use ray_core::render;
use tracing::{info, trace};

/// Runs the gradient command.
pub fn run(args: &OutputArgs, verbose: u8) -> Result<()> {
    trace!(width = args.width, height = args.height, "gradient::run");

    let image = render::gradient(args.width, args.height);
    super::save_image(&args.output, &image)?;

    info!(output = %args.output.display(), width = args.width, height = args.height, "Wrote gradient");
    if verbose > 0 {
        println!("{}x{} gradient -> {}", args.width, args.height, args.output.display());
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
            width: 16,
            height: 8,
            output: dir.path().join("out").join("gradient.png"),
        };

        run(&args, 0).unwrap();

        let bytes = std::fs::read(&args.output).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }
}
