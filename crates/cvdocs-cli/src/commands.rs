use crate::cli::{Commands, RequestArgs};
use crate::logging::{init_logging, LogTarget};
use cvdocs_core::config::get_config_file_path;
use cvdocs_core::status::{
    incidents, metrics, overall_uptime, services, uptime_history, IncidentStatus, Trend,
    UptimeDay, UptimeLevel, HISTORY_DAYS,
};
use cvdocs_core::{
    all_snippets, find_snippet, CodeBlock, DocsConfig, DocsContext, DocsError, EndpointCatalog,
    Explorer, NamedSnippet, RequestDraft, Result, SnippetSet, SystemClipboard,
};
use cvdocs_ui::display_docs_dashboard;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn handle_command(command: Option<Commands>) -> Result<()> {
    let config = DocsConfig::load()?;
    match command {
        Some(command) => {
            init_logging(&config.log_level, LogTarget::Stderr)?;
            handle_subcommand(command, config)
        }
        // Default: open the dashboard when no command is given
        None => {
            init_logging(&config.log_level, LogTarget::File)?;
            handle_dashboard(config)
        }
    }
}

fn handle_subcommand(command: Commands, config: DocsConfig) -> Result<()> {
    match command {
        Commands::Snippets => {
            print!("{}", format_snippets(&all_snippets()));
            Ok(())
        }
        Commands::Snippet { name, lang } => {
            let set = find_snippet(&name)?;
            println!("{}", snippet_code(&name, &set, lang.as_deref())?);
            Ok(())
        }
        Commands::Copy { name, lang } => handle_copy(config, &name, lang.as_deref()),
        Commands::Endpoints => {
            print!("{}", format_endpoints(&EndpointCatalog::connected_vehicles()));
            Ok(())
        }
        Commands::Curl(args) => {
            println!("{}", draft_from(&args).command_line(&config.sandbox_base_url));
            Ok(())
        }
        Commands::Request(args) => handle_request(config, &args),
        Commands::Status { seed } => {
            let seed = seed.or(config.status_seed).unwrap_or_else(|| rand::rng().random());
            let history = uptime_history(&mut StdRng::seed_from_u64(seed), HISTORY_DAYS);
            print!("{}", format_status(&history));
            Ok(())
        }
        Commands::Config => {
            println!("# {}", get_config_file_path().display());
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn build_runtime() -> Result<Runtime> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    Ok(runtime)
}

fn system_context(config: DocsConfig, runtime: &Runtime) -> DocsContext {
    DocsContext::new(
        config,
        runtime.handle().clone(),
        Arc::new(SystemClipboard),
    )
}

fn handle_dashboard(config: DocsConfig) -> Result<()> {
    let seed = config.status_seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(seed, "opening dashboard");

    let runtime = build_runtime()?;
    let ctx = system_context(config, &runtime);
    display_docs_dashboard(&ctx, &mut StdRng::seed_from_u64(seed))
}

fn handle_copy(config: DocsConfig, name: &str, lang: Option<&str>) -> Result<()> {
    let set = find_snippet(name)?;
    let runtime = build_runtime()?;
    let ctx = system_context(config, &runtime);

    let mut block = CodeBlock::new(&ctx, set);
    if let Some(language) = lang {
        if !block.select_language(language) {
            return Err(language_not_found(name, language));
        }
    }

    let language = block
        .visible()
        .map(|variant| variant.language.to_string())
        .unwrap_or_default();
    if !block.copy_visible() {
        return Err(DocsError::Clipboard(format!(
            "could not copy snippet '{}'",
            name
        )));
    }
    println!("Copied {} ({}) to clipboard", name, language);
    Ok(())
}

fn handle_request(config: DocsConfig, args: &RequestArgs) -> Result<()> {
    let runtime = build_runtime()?;
    let ctx = system_context(config, &runtime);
    let draft = draft_from(args);

    let body = runtime.block_on(async {
        let mut explorer = Explorer::new(&ctx);
        explorer.select_endpoint(draft.endpoint_path.clone());
        explorer.select_method(draft.method);
        explorer.set_auth_token(draft.auth_token.clone());
        explorer.set_resource_id(draft.resource_id.clone());

        eprintln!("{}", explorer.command_line());
        explorer.submit();
        while explorer.is_pending() {
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        explorer.response_body()
    });

    println!("{}", body);
    Ok(())
}

fn language_not_found(name: &str, language: &str) -> DocsError {
    DocsError::LanguageNotFound {
        snippet: name.to_string(),
        language: language.to_string(),
    }
}

/// The code of one variant: the requested language, or the default tab.
fn snippet_code(name: &str, set: &SnippetSet, lang: Option<&str>) -> Result<String> {
    let index = match lang {
        Some(language) => set
            .position(language)
            .ok_or_else(|| language_not_found(name, language))?,
        None => set
            .default_tab()
            .ok_or_else(|| DocsError::SnippetNotFound(name.to_string()))?,
    };
    set.variant(index)
        .map(|variant| variant.code.to_string())
        .ok_or_else(|| DocsError::SnippetNotFound(name.to_string()))
}

fn draft_from(args: &RequestArgs) -> RequestDraft {
    RequestDraft {
        endpoint_path: args.endpoint.clone(),
        method: args.method,
        auth_token: args.token.clone().unwrap_or_default(),
        resource_id: args.id.clone().unwrap_or_default(),
        ..RequestDraft::default()
    }
}

fn format_endpoints(catalog: &EndpointCatalog) -> String {
    let mut out = String::new();
    for endpoint in catalog.endpoints() {
        let _ = writeln!(
            out,
            "{:<7}{:<28}{}",
            endpoint.method, endpoint.path, endpoint.description
        );
    }
    out
}

/// One line per snippet under a header per section: slug, languages, title.
fn format_snippets(snippets: &[NamedSnippet]) -> String {
    let mut out = String::new();
    let mut section = None;
    for named in snippets {
        if section != Some(named.section) {
            if section.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", named.section.title());
            section = Some(named.section);
        }
        let languages: Vec<&str> = named.set.variants().map(|v| v.language).collect();
        let _ = writeln!(
            out,
            "  {:<24}{:<32}{}",
            named.slug,
            languages.join(","),
            named.set.title.as_deref().unwrap_or_default()
        );
    }
    out
}

fn uptime_glyph(day: &UptimeDay) -> char {
    match day.level() {
        UptimeLevel::Healthy => '█',
        UptimeLevel::Degraded => '▅',
        UptimeLevel::Outage => '▁',
    }
}

fn format_status(history: &[UptimeDay]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Metrics");
    for metric in metrics() {
        let arrow = match metric.trend {
            Trend::Up => '↑',
            Trend::Down => '↓',
        };
        let _ = writeln!(
            out,
            "  {:<24}{:>8}  {} {}",
            metric.name, metric.value, arrow, metric.change
        );
    }

    let _ = writeln!(out, "\nServices");
    for service in services() {
        let _ = writeln!(
            out,
            "  {:<24}{:<12}{:>7.2}%  {:>4}ms",
            service.name,
            service.status.label(),
            service.uptime,
            service.response_time_ms
        );
    }

    let _ = writeln!(
        out,
        "\nUptime ({} days, {:.2}% overall)",
        history.len(),
        overall_uptime(history)
    );
    let bars: String = history.iter().map(uptime_glyph).collect();
    let _ = writeln!(out, "  {}", bars);

    let _ = writeln!(out, "\nIncidents");
    for incident in incidents() {
        let state = match incident.status {
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Resolved => "resolved",
        };
        let _ = writeln!(out, "  [{}] {} ({})", state, incident.title, incident.id);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvdocs_core::HttpMethod;

    fn args(endpoint: &str, method: HttpMethod) -> RequestArgs {
        RequestArgs {
            endpoint: endpoint.to_string(),
            method,
            token: None,
            id: None,
        }
    }

    #[test]
    fn snippet_code_defaults_to_first_language() {
        let set = find_snippet("install").unwrap();
        let code = snippet_code("install", &set, None).unwrap();
        assert_eq!(code, set.variant(0).unwrap().code);
    }

    #[test]
    fn snippet_code_rejects_missing_language() {
        let set = find_snippet("client").unwrap();
        let err = snippet_code("client", &set, Some("cobol")).unwrap_err();
        assert!(matches!(err, DocsError::LanguageNotFound { .. }));
    }

    #[test]
    fn snippet_code_reaches_every_section() {
        let set = find_snippet("rate-limiting").unwrap();
        let code = snippet_code("rate-limiting", &set, None).unwrap();
        assert!(code.starts_with("// Implement exponential backoff for rate limits"));

        let set = find_snippet("location-request").unwrap();
        let code = snippet_code("location-request", &set, Some("curl")).unwrap();
        assert!(code.starts_with("curl -X GET"));
    }

    #[test]
    fn snippet_listing_groups_by_section() {
        let snippets = all_snippets();
        let listing = format_snippets(&snippets);

        assert!(listing.starts_with("Overview\n  vehicle-access "));
        assert!(listing.contains("\nWebhooks\n"));
        let verify = listing
            .lines()
            .find(|line| line.trim_start().starts_with("webhook-verify "))
            .unwrap();
        assert!(verify.contains("javascript,python"));
        assert!(verify.ends_with("Webhook Verification"));

        let entries = listing.lines().filter(|line| line.starts_with("  ")).count();
        assert_eq!(entries, snippets.len());
    }

    #[test]
    fn curl_uses_placeholders_for_missing_values() {
        let draft = draft_from(&args("/v1/vehicles/{id}/lock", HttpMethod::Post));
        let command = draft.command_line("https://sandbox.example");
        assert!(command.starts_with(
            "curl -X POST \"https://sandbox.example/v1/vehicles/VEHICLE_ID/lock\""
        ));
        assert!(command.contains("Bearer YOUR_ACCESS_TOKEN"));
    }

    #[test]
    fn endpoints_list_every_path() {
        let listing = format_endpoints(&EndpointCatalog::connected_vehicles());
        assert_eq!(listing.lines().count(), 6);
        assert!(listing.lines().next().unwrap().starts_with("GET    /v1/vehicles "));
    }

    #[test]
    fn status_report_has_one_glyph_per_day() {
        let history = uptime_history(&mut StdRng::seed_from_u64(5), HISTORY_DAYS);
        let report = format_status(&history);

        let bars = report
            .lines()
            .skip_while(|line| !line.starts_with("Uptime"))
            .nth(1)
            .unwrap();
        assert_eq!(bars.trim().chars().count(), HISTORY_DAYS);
        assert!(report.contains("Webhook Delivery"));
    }
}
