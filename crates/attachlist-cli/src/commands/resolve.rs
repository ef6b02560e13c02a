use std::path::Path;

use attachlist_core::config::ResolverConfig;
use attachlist_core::{AttachmentLayout, AttachmentListResolver, ResolveRequest};

use crate::cli::ResolveArgs;
use crate::commands::common::{
    format_layout_header, format_layout_lines, load_config, read_input, AttachmentInput,
};
use crate::error::CliError;

pub fn run_resolve(args: &ResolveArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let input = read_input(&args.input)?;
    let layout = resolve_input(&config, input, args)?;

    for failure in &layout.match_failures {
        tracing::warn!(
            file_id = %failure.file_id,
            plugin_id = %failure.plugin_id,
            entry_id = %failure.entry_id,
            "Skipping plugin renderer: {}",
            failure.error
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        println!("{}", format_layout_header(&layout));
        for line in format_layout_lines(&layout) {
            println!("{line}");
        }
    }

    Ok(())
}

/// Build the request from the document and flags, then resolve it.
pub fn resolve_input(
    config: &ResolverConfig,
    input: AttachmentInput,
    args: &ResolveArgs,
) -> Result<AttachmentLayout<String>, CliError> {
    let mut settings = config.display.clone();
    if args.enable_svgs {
        settings.enable_svgs = true;
    }
    if args.compact {
        settings.compact_display = true;
    }

    let file_count = args.count.unwrap_or_else(|| input.effective_file_count());
    let request = ResolveRequest {
        post: input.post,
        file_count,
        file_infos: input.file_infos,
        context: settings.to_context(),
    };

    let resolver = AttachmentListResolver::new(config.plugin_entries()?);
    tracing::debug!(
        plugins = resolver.plugins().len(),
        file_count,
        "Resolving attachment list"
    );
    Ok(resolver.resolve(&request))
}
