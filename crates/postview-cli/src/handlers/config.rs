use anyhow::{Context, Result};
use postview_runtime::Config;

use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::{present_config, present_config_init};

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let result = present_config(&ctx.config_path, &ctx.config, ctx.file.as_deref());
    ctx.renderer().render(result)
}

/// Write the default config. An existing file is kept unless `force` is set.
pub fn init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = &ctx.config_path;
    let written = if path.exists() && !force {
        false
    } else {
        Config::default()
            .save_to(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        true
    };

    ctx.renderer().render(present_config_init(path, written))
}
