use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use postview_runtime::{BrowserSession, PostSource};
use tracing::info;

use crate::context::ExecutionContext;
use crate::presentation::renderers::TuiRenderer;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() || !std::io::stdin().is_terminal() {
        bail!("The interactive browser needs a terminal. Use `postview list` or `postview show <ID>` instead.");
    }

    let source = ctx.source()?;
    info!(source = %source.describe(), "starting interactive browser");

    let runtime = ctx.runtime()?;
    let result = {
        let _guard = runtime.enter();
        TuiRenderer::new(BrowserSession::new(source)).run()
    };
    runtime.shutdown_background();

    result
}
