//! Command handlers: one tracker call per subcommand, rendered as markdown.

use anyhow::{Result, bail};
use tick_core::{
    ItemStatus, ListStatus, Tracker,
    params::{ItemRef, ListChecklists},
};

use crate::{
    cli::{CategoryCommands, HistoryCommands, ItemCommands, ListCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

fn partition_heading(status: ListStatus) -> &'static str {
    match status {
        ListStatus::Active => "# Active Lists",
        ListStatus::Saved => "# Saved Lists",
        ListStatus::History => "# History",
    }
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    fn print(&self, markdown: impl ToString) {
        self.renderer.render(&markdown.to_string());
    }

    pub async fn handle_list_command(&self, command: ListCommands) -> Result<()> {
        match command {
            ListCommands::Create(args) => {
                let result = self.tracker.create_checklist_result(&args.into()).await?;
                self.print(result);
            }
            ListCommands::Ls(args) => self.list_checklists(&args.into()).await?,
            ListCommands::Show(args) => {
                let checklist = self.tracker.get_checklist(&args.into()).await?;
                self.print(checklist);
            }
            ListCommands::Update(args) => {
                let result = self.tracker.update_checklist_result(&args.into()).await?;
                self.print(result);
            }
            ListCommands::Move(args) => {
                let result = self.tracker.move_checklist_result(&args.into()).await?;
                self.print(result);
            }
            ListCommands::Delete(args) => {
                let result = self.tracker.delete_checklist_result(&args.into()).await?;
                self.print(result);
            }
            ListCommands::Favorite(args) => {
                let result = self.tracker.toggle_favorite_result(&args.into()).await?;
                self.print(result);
            }
            ListCommands::Uncheck(args) => {
                let result = self.tracker.uncheck_all_result(&args.into()).await?;
                self.print(result);
            }
            ListCommands::Search(args) => {
                let summaries = self.tracker.search_checklists_summary(&args.into()).await?;
                self.print(format!("# Search Results\n\n{summaries}"));
            }
        }
        Ok(())
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => {
                let result = self.tracker.add_item_result(&args.into()).await?;
                self.print(result);
            }
            ItemCommands::Ls(args) => {
                let items = self.tracker.list_items_result(&args.into()).await?;
                self.print(items);
            }
            ItemCommands::Update(args) => {
                let result = self.tracker.update_item_result(&args.into()).await?;
                self.print(result);
            }
            ItemCommands::Check(args) => {
                let status = args.status();
                self.set_item_status(args.into(), status).await?;
            }
            ItemCommands::Uncheck(args) => {
                self.set_item_status(args.into(), ItemStatus::Unchecked)
                    .await?;
            }
            ItemCommands::Delete(args) => {
                let result = self.tracker.delete_item_result(&args.into()).await?;
                self.print(result);
            }
        }
        Ok(())
    }

    pub async fn handle_category_command(&self, command: CategoryCommands) -> Result<()> {
        match command {
            CategoryCommands::Ls => {
                let categories = self.tracker.list_categories_result().await?;
                self.print(format!("# Categories\n\n{categories}"));
            }
            CategoryCommands::Save(args) => {
                let result = self.tracker.save_category_result(&args.into()).await?;
                self.print(result);
            }
            CategoryCommands::Rename(args) => {
                let result = self.tracker.rename_category_result(&args.into()).await?;
                self.print(result);
            }
            CategoryCommands::Delete(args) => {
                let result = self.tracker.delete_category_result(&args.into()).await?;
                self.print(result);
            }
        }
        Ok(())
    }

    pub async fn handle_history_command(&self, command: HistoryCommands) -> Result<()> {
        match command {
            HistoryCommands::Clear => {
                let status = self.tracker.clear_history_result().await?;
                self.print(status);
            }
        }
        Ok(())
    }

    /// Lists one partition under a heading naming it.
    pub async fn list_checklists(&self, params: &ListChecklists) -> Result<()> {
        let summaries = self.tracker.list_checklists_summary(params).await?;
        self.print(format!("{}\n\n{summaries}", partition_heading(params.status)));
        Ok(())
    }

    pub async fn statistics(&self) -> Result<()> {
        self.print(self.tracker.statistics().await?);
        Ok(())
    }

    pub async fn targets(&self) -> Result<()> {
        let targets = self.tracker.targets_result().await?;
        self.print(format!("# Targets\n\n{targets}"));
        Ok(())
    }

    /// Prints the integrity report and fails when it found problems.
    pub async fn check(&self) -> Result<()> {
        let report = self.tracker.integrity_report().await?;
        self.print(&report);
        if !report.is_healthy() {
            bail!("Store check found problems");
        }
        Ok(())
    }

    /// Writes the JSON export to stdout without markdown rendering.
    pub async fn export(&self) -> Result<()> {
        println!("{}", self.tracker.export_json().await?);
        Ok(())
    }

    async fn set_item_status(&self, item: ItemRef, status: ItemStatus) -> Result<()> {
        let result = self.tracker.set_item_status_result(&item, status).await?;
        self.print(result);
        Ok(())
    }
}
