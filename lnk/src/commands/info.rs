use lnk_format::LnkFile;
use serde_json::{json, Value};

use crate::cli::InfoArgs;
use crate::error::{Error, Result};
use crate::util::{format_attributes, format_serial, format_size};

fn to_json(lnk: &LnkFile) -> Value {
    json!({
        "path": lnk.file_path().display().to_string(),
        "target": {
            "path": lnk.target_path(),
            "relative_path": lnk.relative_target_path(),
            "size": lnk.target_size(),
            "attributes": format_attributes(lnk.target_attributes()),
            "network": lnk.target_is_on_network(),
        },
        "volume": {
            "type": lnk.target_volume_type().to_string(),
            "serial": lnk.target_volume_serial(),
            "name": lnk.target_volume_name(),
        },
        "description": lnk.description(),
        "working_directory": lnk.working_directory(),
        "arguments": lnk.command_line_args(),
        "icon": if lnk.has_custom_icon() {
            json!({ "path": lnk.icon_path(), "index": lnk.icon_index() })
        } else {
            Value::Null
        },
    })
}

fn render(lnk: &LnkFile) -> String {
    let mut lines = vec![
        format!("Shortcut:     {}", lnk.file_path().display()),
        format!("Target:       {}", lnk.target_path()),
    ];

    if let Some(relative) = lnk.relative_target_path() {
        lines.push(format!("Relative:     {}", relative));
    }
    lines.push(format!("Size:         {}", format_size(lnk.target_size())));
    lines.push(format!("Attributes:   {}", format_attributes(lnk.target_attributes())));

    if lnk.target_is_on_network() {
        lines.push(format!("Share:        {}", lnk.target_volume_name()));
    } else {
        lines.push(format!(
            "Volume:       {} ({}, serial {})",
            lnk.target_volume_name(),
            lnk.target_volume_type(),
            format_serial(lnk.target_volume_serial())
        ));
    }

    if let Some(dir) = lnk.working_directory() {
        lines.push(format!("Working dir:  {}", dir));
    }
    if let Some(args) = lnk.command_line_args() {
        lines.push(format!("Arguments:    {}", args));
    }
    if let Some(description) = lnk.description() {
        lines.push(format!("Description:  {}", description));
    }
    if let Some(icon) = lnk.icon_path().filter(|_| lnk.has_custom_icon()) {
        lines.push(format!("Icon:         {},{}", icon, lnk.icon_index()));
    }

    lines.join("\n") + "\n"
}

pub fn run(args: InfoArgs) -> Result<()> {
    let files = args
        .files
        .iter()
        .map(|path| super::open(path))
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        let value = Value::Array(files.iter().map(to_json).collect());
        let text = serde_json::to_string_pretty(&value).map_err(|source| Error::Json { source })?;
        println!("{}", text);
        return Ok(());
    }

    for (i, lnk) in files.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", render(lnk));
    }

    Ok(())
}
