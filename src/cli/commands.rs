//! Command handlers. Each drives the workbench and returns the projection
//! slice the command is about, ready to print as JSON.

use std::path::Path;

use anyhow::{bail, Context};
use sd_app::SpiderWorkbench;
use sd_core::config::AppConfig;
use sd_core::{ImportForm, NodeId, SpiderId, SpiderListQuery};
use sd_infra::config::write_default_config;
use serde_json::{json, Value};
use tracing::info;

use super::args::Command;
use super::edit::apply_assignments;

/// Writes the default config to `path`, refusing to clobber without `force`.
pub fn init_config(path: &Path, force: bool) -> anyhow::Result<Value> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }
    write_default_config(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(json!({ "written": path }))
}

/// Runs one network command against the workbench.
///
/// `config` subcommands never reach here; they run before any transport is
/// built.
pub async fn execute(
    command: Command,
    workbench: &SpiderWorkbench,
    config: &AppConfig,
) -> anyhow::Result<Value> {
    let projector = workbench.projector();

    let output = match command {
        Command::List {
            page,
            page_size,
            keyword,
            spider_type,
            site,
        } => {
            if let Some(site) = site {
                projector.set_filter_site(site);
            }
            let mut query = SpiderListQuery::page(page, page_size.unwrap_or(config.api.page_size))
                .with_filter(&projector.state().filter);
            if let Some(keyword) = keyword {
                query = query.with_keyword(keyword);
            }
            if let Some(spider_type) = spider_type {
                query = query.with_type(spider_type);
            }
            projector.list(query).await?;
            list_view(workbench)
        }
        Command::Show { id } => {
            projector.load(&SpiderId::from(id)).await?;
            json!(projector.state().spider_form)
        }
        Command::Open { id } => {
            workbench.open_spider(&SpiderId::from(id)).await?;
            let state = projector.state();
            json!({
                "spider": state.spider_form,
                "tasks": workbench.tasks().task_list,
                "overview": state.overview_stats,
                "daily": state.daily_stats,
            })
        }
        Command::Save { id, assignments } => {
            let id = SpiderId::from(id);
            projector.load(&id).await?;
            let loaded = projector
                .state()
                .spider_form
                .with_context(|| format!("Server returned no spider for {id}"))?;
            projector.set_spider_form(apply_assignments(loaded, &assignments)?);
            projector.save().await?;
            info!(spider_id = %id, "Spider saved");
            list_view(workbench)
        }
        Command::Delete { id } => {
            projector.delete(&SpiderId::from(id)).await?;
            list_view(workbench)
        }
        Command::Run { id, node, param } => {
            projector
                .enqueue(&SpiderId::from(id), &NodeId::from(node), param)
                .await?
        }
        Command::Tasks { id } => {
            workbench.refresh_tasks(&SpiderId::from(id)).await?;
            json!(workbench.tasks().task_list)
        }
        Command::Stats { id } => {
            projector.refresh_stats(&SpiderId::from(id)).await?;
            let state = projector.state();
            json!({ "overview": state.overview_stats, "daily": state.daily_stats })
        }
        Command::Preview { id } => {
            projector.preview_execution(&SpiderId::from(id)).await?;
            json!(projector.state().preview_crawl_data)
        }
        Command::Extract { id } => projector.extract_schema(&SpiderId::from(id)).await?,
        Command::Import { url } => {
            projector.set_import_form(ImportForm::github(url));
            projector.import_from_external_source().await?
        }
        Command::Dir { id, path } => {
            projector.browse_dir(&SpiderId::from(id), &path).await?;
            let state = projector.state();
            json!({ "path": state.dir_path, "entries": state.dir_entries })
        }
        Command::Cat { id, path } => {
            Value::String(projector.read_file(&SpiderId::from(id), &path).await?)
        }
        Command::Write { id, path, from } => {
            let content = tokio::fs::read_to_string(&from)
                .await
                .with_context(|| format!("Failed to read {}", from.display()))?;
            projector
                .write_file(&SpiderId::from(id), &path, &content)
                .await?;
            json!({ "written": path, "bytes": content.len() })
        }
        Command::Publish { id } => {
            let id = SpiderId::from(id);
            projector.publish(&id).await?;
            json!({ "published": id })
        }
        Command::Types => {
            projector.list_types().await?;
            json!(projector.state().spider_types)
        }
        Command::Config(_) => bail!("config commands do not talk to the server"),
    };

    Ok(output)
}

fn list_view(workbench: &SpiderWorkbench) -> Value {
    let state = workbench.projector().state();
    json!({ "list": state.spider_list, "total": state.spider_total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init_config(&path, false).unwrap();
        assert!(init_config(&path, false).is_err());
        assert!(init_config(&path, true).is_ok());
    }
}
