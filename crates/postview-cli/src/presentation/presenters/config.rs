use postview_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config(
    path: &Path,
    config: &Config,
    file: Option<&Path>,
) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        url: config.source.url.clone(),
        timeout_secs: config.source.timeout_secs,
        file: file.map(|f| f.display().to_string()),
    };

    let result = CommandResultViewModel::new(content);
    if exists {
        result
    } else {
        result.with_suggestion(
            Guidance::new("Create a config file to change the defaults")
                .with_command("postview config init"),
        )
    }
}

pub fn present_config_init(path: &Path, written: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.display().to_string(),
        written,
    };

    if written {
        CommandResultViewModel::new(content).with_badge(StatusBadge::success("Config written"))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("Config already exists"))
            .with_suggestion(
                Guidance::new("Overwrite it with defaults").with_command("postview config init --force"),
            )
    }
}
