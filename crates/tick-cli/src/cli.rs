//! Command-line argument definitions using clap
//!
//! Every subcommand has its own clap `Args` struct and a `From` conversion
//! into the matching parameter type of `tick_core::params`, so the core stays
//! free of clap attributes:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! The value enums at the bottom of this module mirror the core enums with
//! kebab-case names suitable for the command line.

use clap::{Args, Subcommand, ValueEnum};
use jiff::Timestamp;
use tick_core::{
    ItemStatus, ListStatus, Priority,
    codec::parse_timestamp,
    params::*,
    query::{ChecklistOrder, ItemOrder, SearchMode, SortDirection},
};

// ============================================================================
// Checklists
// ============================================================================

/// Create a new checklist
#[derive(Args)]
pub struct CreateListArgs {
    /// Name of the checklist
    pub name: String,
    #[arg(short, long, help = "Free-text description shown under the title")]
    pub description: Option<String>,
    #[arg(
        short,
        long,
        help = "Category name; must exist in the registry (default: Uncategorized)"
    )]
    pub category: Option<String>,
    #[arg(
        short,
        long,
        value_parser = parse_timestamp,
        help = "Target date, as YYYY-MM-DD or an RFC 3339 timestamp"
    )]
    pub target: Option<Timestamp>,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = StatusArg::Active,
        help = "Partition to create the checklist in"
    )]
    pub status: StatusArg,
    #[arg(long, help = "Mark the checklist as recurring")]
    pub continual: bool,
}

impl From<CreateListArgs> for CreateChecklist {
    fn from(val: CreateListArgs) -> Self {
        CreateChecklist {
            name: val.name,
            description: val.description,
            category: val.category,
            target: val.target,
            status: val.status.into(),
            continual: val.continual,
        }
    }
}

/// List the checklists of one partition
///
/// Checklists are shown newest first unless an order is given.
#[derive(Args)]
pub struct ListListsArgs {
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = StatusArg::Active,
        help = "Partition to list"
    )]
    pub status: StatusArg,
    #[arg(short, long, help = "Only show favorites")]
    pub favorite: bool,
    #[arg(short = 'q', long, help = "Only show checklists matching this text")]
    pub search: Option<String>,
    #[arg(short, long, value_enum, help = "What the search text is matched against")]
    pub mode: Option<SearchModeArg>,
    #[arg(short, long, value_enum, help = "Sort key")]
    pub order: Option<OrderArg>,
    #[arg(short, long, value_enum, help = "Sort direction")]
    pub direction: Option<DirectionArg>,
}

impl From<ListListsArgs> for ListChecklists {
    fn from(val: ListListsArgs) -> Self {
        ListChecklists {
            status: val.status.into(),
            favorite: val.favorite.then_some(true),
            search: val.search,
            mode: val.mode.map(Into::into).unwrap_or_default(),
            order: val.order.map(Into::into),
            direction: val.direction.map(Into::into),
        }
    }
}

/// Show a checklist with all of its items
#[derive(Args)]
pub struct ShowListArgs {
    #[arg(help = "ID of the checklist to show")]
    pub id: String,
}

impl From<ShowListArgs> for Id {
    fn from(val: ShowListArgs) -> Self {
        Id::new(val.id)
    }
}

/// Update the details of a checklist
///
/// Only the given fields change. Use `list move` to change the partition.
#[derive(Args)]
pub struct UpdateListArgs {
    #[arg(help = "ID of the checklist to update")]
    pub id: String,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New description; an empty string clears it")]
    pub description: Option<String>,
    #[arg(short, long, help = "New category")]
    pub category: Option<String>,
    #[arg(
        short,
        long,
        value_parser = parse_timestamp,
        help = "New target date, as YYYY-MM-DD or an RFC 3339 timestamp"
    )]
    pub target: Option<Timestamp>,
    #[arg(long, help = "Remove the target date")]
    pub clear_target: bool,
    #[arg(long, help = "Set or clear the recurring marker (true/false)")]
    pub continual: Option<bool>,
    #[arg(long, help = "Set or clear the favorite marker (true/false)")]
    pub favorite: Option<bool>,
}

impl From<UpdateListArgs> for UpdateChecklist {
    fn from(val: UpdateListArgs) -> Self {
        UpdateChecklist {
            id: val.id,
            name: val.name,
            description: val.description,
            category: val.category,
            target: val.target,
            clear_target: val.clear_target,
            continual: val.continual,
            favorite: val.favorite,
        }
    }
}

/// Move a checklist to another partition
///
/// Moving into history records the completion time; moving out of history
/// clears it.
#[derive(Args)]
pub struct MoveListArgs {
    #[arg(help = "ID of the checklist to move")]
    pub id: String,
    #[arg(value_enum, help = "Destination partition")]
    pub status: StatusArg,
}

impl From<MoveListArgs> for MoveChecklist {
    fn from(val: MoveListArgs) -> Self {
        MoveChecklist {
            id: val.id,
            status: val.status.into(),
        }
    }
}

/// Delete a checklist document permanently
#[derive(Args)]
pub struct DeleteListArgs {
    #[arg(help = "ID of the checklist to delete")]
    pub id: String,
}

impl From<DeleteListArgs> for Id {
    fn from(val: DeleteListArgs) -> Self {
        Id::new(val.id)
    }
}

/// Toggle the favorite marker of a checklist
#[derive(Args)]
pub struct FavoriteListArgs {
    #[arg(help = "ID of the checklist")]
    pub id: String,
}

impl From<FavoriteListArgs> for Id {
    fn from(val: FavoriteListArgs) -> Self {
        Id::new(val.id)
    }
}

/// Reset every item of a checklist to unchecked
#[derive(Args)]
pub struct UncheckListArgs {
    #[arg(help = "ID of the checklist")]
    pub id: String,
}

impl From<UncheckListArgs> for Id {
    fn from(val: UncheckListArgs) -> Self {
        Id::new(val.id)
    }
}

/// Search checklists across active, saved and history
#[derive(Args)]
pub struct SearchListsArgs {
    #[arg(help = "Text to search for, case-insensitive")]
    pub text: String,
    #[arg(short, long, value_enum, help = "What the text is matched against")]
    pub mode: Option<SearchModeArg>,
    #[arg(short, long, value_enum, help = "Re-sort the combined result")]
    pub order: Option<OrderArg>,
    #[arg(short, long, value_enum, help = "Sort direction")]
    pub direction: Option<DirectionArg>,
}

impl From<SearchListsArgs> for SearchChecklists {
    fn from(val: SearchListsArgs) -> Self {
        SearchChecklists {
            text: val.text,
            mode: val.mode.map(Into::into).unwrap_or_default(),
            order: val.order.map(Into::into),
            direction: val.direction.map(Into::into),
        }
    }
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// Create a new checklist
    #[command(alias = "c")]
    Create(CreateListArgs),
    /// List the checklists of one partition
    #[command(aliases = ["l", "list"])]
    Ls(ListListsArgs),
    /// Show a checklist with all of its items
    #[command(alias = "s")]
    Show(ShowListArgs),
    /// Update the details of a checklist
    #[command(alias = "u")]
    Update(UpdateListArgs),
    /// Move a checklist to another partition
    #[command(alias = "mv")]
    Move(MoveListArgs),
    /// Delete a checklist permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteListArgs),
    /// Toggle the favorite marker
    #[command(alias = "fav")]
    Favorite(FavoriteListArgs),
    /// Reset every item to unchecked
    Uncheck(UncheckListArgs),
    /// Search checklists across all partitions
    #[command(alias = "f")]
    Search(SearchListsArgs),
}

// ============================================================================
// Items
// ============================================================================

/// Append an item to a checklist
#[derive(Args)]
pub struct AddItemArgs {
    #[arg(help = "ID of the checklist to add the item to")]
    pub checklist_id: String,
    /// Item text
    pub name: String,
    #[arg(short, long, help = "Comments shown under the item; may span lines")]
    pub comments: Option<String>,
    #[arg(short, long, value_enum, default_value_t = PriorityArg::Normal)]
    pub priority: PriorityArg,
}

impl From<AddItemArgs> for AddItem {
    fn from(val: AddItemArgs) -> Self {
        AddItem {
            checklist_id: val.checklist_id,
            name: val.name,
            comments: val.comments,
            priority: val.priority.into(),
        }
    }
}

/// List the items of a checklist
///
/// Every item is shown with its stored index, which `item update`,
/// `item check` and `item delete` take.
#[derive(Args)]
pub struct ListItemsArgs {
    #[arg(help = "ID of the checklist")]
    pub checklist_id: String,
    #[arg(short, long, value_enum, help = "Only show items with this status")]
    pub status: Option<ItemStatusArg>,
    #[arg(short = 'q', long, help = "Only show items whose name or comments match")]
    pub search: Option<String>,
    #[arg(short, long, value_enum, default_value_t = ItemOrderArg::Stored)]
    pub order: ItemOrderArg,
}

impl From<ListItemsArgs> for ListItems {
    fn from(val: ListItemsArgs) -> Self {
        ListItems {
            checklist_id: val.checklist_id,
            status: val.status.map(Into::into),
            search: val.search,
            order: val.order.into(),
        }
    }
}

/// Update the details of an item
#[derive(Args)]
pub struct UpdateItemArgs {
    #[arg(help = "ID of the checklist")]
    pub checklist_id: String,
    #[arg(help = "0-based index of the item")]
    pub index: usize,
    #[arg(short, long, help = "New item text")]
    pub name: Option<String>,
    #[arg(short, long, help = "New comments; an empty string clears them")]
    pub comments: Option<String>,
    #[arg(short, long, value_enum, help = "New priority")]
    pub priority: Option<PriorityArg>,
    #[arg(short, long, value_enum, help = "New check status")]
    pub status: Option<ItemStatusArg>,
}

impl From<UpdateItemArgs> for UpdateItem {
    fn from(val: UpdateItemArgs) -> Self {
        UpdateItem {
            checklist_id: val.checklist_id,
            index: val.index,
            name: val.name,
            comments: val.comments,
            priority: val.priority.map(Into::into),
            status: val.status.map(Into::into),
        }
    }
}

/// Check an item off
#[derive(Args)]
pub struct CheckItemArgs {
    #[arg(help = "ID of the checklist")]
    pub checklist_id: String,
    #[arg(help = "0-based index of the item")]
    pub index: usize,
    #[arg(long, help = "Use the alternate check mark ([X])")]
    pub alt: bool,
}

impl CheckItemArgs {
    pub fn status(&self) -> ItemStatus {
        if self.alt {
            ItemStatus::CheckedAlt
        } else {
            ItemStatus::Checked
        }
    }
}

impl From<CheckItemArgs> for ItemRef {
    fn from(val: CheckItemArgs) -> Self {
        ItemRef {
            checklist_id: val.checklist_id,
            index: val.index,
        }
    }
}

/// Address of a single item
#[derive(Args)]
pub struct ItemRefArgs {
    #[arg(help = "ID of the checklist")]
    pub checklist_id: String,
    #[arg(help = "0-based index of the item")]
    pub index: usize,
}

impl From<ItemRefArgs> for ItemRef {
    fn from(val: ItemRefArgs) -> Self {
        ItemRef {
            checklist_id: val.checklist_id,
            index: val.index,
        }
    }
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Append an item to a checklist
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// List the items of a checklist
    #[command(aliases = ["l", "list"])]
    Ls(ListItemsArgs),
    /// Update the details of an item
    #[command(alias = "u")]
    Update(UpdateItemArgs),
    /// Check an item off
    #[command(alias = "x")]
    Check(CheckItemArgs),
    /// Mark an item as not done
    Uncheck(ItemRefArgs),
    /// Remove an item; later items shift down by one
    #[command(aliases = ["d", "rm"])]
    Delete(ItemRefArgs),
}

// ============================================================================
// Categories
// ============================================================================

/// Add a category, or update the description and icon of an existing one
#[derive(Args)]
pub struct SaveCategoryArgs {
    /// Category name
    pub name: String,
    #[arg(short, long, default_value = "", help = "Short description")]
    pub description: String,
    #[arg(short, long, default_value = "default", help = "Icon token")]
    pub icon: String,
}

impl From<SaveCategoryArgs> for SaveCategory {
    fn from(val: SaveCategoryArgs) -> Self {
        SaveCategory {
            name: val.name,
            description: val.description,
            icon: val.icon,
        }
    }
}

/// Rename a category
///
/// Checklists keep the category name they were saved with.
#[derive(Args)]
pub struct RenameCategoryArgs {
    /// Current name
    pub name: String,
    /// New name
    pub new_name: String,
    #[arg(short, long, help = "Replace the description")]
    pub description: Option<String>,
    #[arg(short, long, help = "Replace the icon")]
    pub icon: Option<String>,
}

impl From<RenameCategoryArgs> for RenameCategory {
    fn from(val: RenameCategoryArgs) -> Self {
        RenameCategory {
            name: val.name,
            new_name: val.new_name,
            description: val.description,
            icon: val.icon,
        }
    }
}

/// Delete a category from the registry
#[derive(Args)]
pub struct DeleteCategoryArgs {
    /// Category name
    pub name: String,
}

impl From<DeleteCategoryArgs> for CategoryName {
    fn from(val: DeleteCategoryArgs) -> Self {
        CategoryName { name: val.name }
    }
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    #[command(aliases = ["l", "list"])]
    Ls,
    /// Add or update a category
    #[command(alias = "s")]
    Save(SaveCategoryArgs),
    /// Rename a category
    #[command(alias = "mv")]
    Rename(RenameCategoryArgs),
    /// Delete a category
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteCategoryArgs),
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Permanently delete every checklist in history
    Clear,
}

// ============================================================================
// Value enums
// ============================================================================

/// Checklist partition
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Active lists
    Active,
    /// Saved templates
    Saved,
    /// Completed lists
    History,
}

impl From<StatusArg> for ListStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Active => ListStatus::Active,
            StatusArg::Saved => ListStatus::Saved,
            StatusArg::History => ListStatus::History,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Normal,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Normal => Priority::Normal,
            PriorityArg::High => Priority::High,
        }
    }
}

/// Item check status
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ItemStatusArg {
    /// Not done ([ ])
    Unchecked,
    /// Done ([x])
    Checked,
    /// Done with the alternate mark ([X])
    Alt,
}

impl From<ItemStatusArg> for ItemStatus {
    fn from(val: ItemStatusArg) -> Self {
        match val {
            ItemStatusArg::Unchecked => ItemStatus::Unchecked,
            ItemStatusArg::Checked => ItemStatus::Checked,
            ItemStatusArg::Alt => ItemStatus::CheckedAlt,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SearchModeArg {
    /// Name or description
    Default,
    /// Name only
    Name,
    /// Exact category
    Category,
}

impl From<SearchModeArg> for SearchMode {
    fn from(val: SearchModeArg) -> Self {
        match val {
            SearchModeArg::Default => SearchMode::Default,
            SearchModeArg::Name => SearchMode::Name,
            SearchModeArg::Category => SearchMode::Category,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Name,
    Category,
    /// Creation time
    Created,
    /// Target date; undated checklists come last
    Target,
}

impl From<OrderArg> for ChecklistOrder {
    fn from(val: OrderArg) -> Self {
        match val {
            OrderArg::Name => ChecklistOrder::Name,
            OrderArg::Category => ChecklistOrder::Category,
            OrderArg::Created => ChecklistOrder::Created,
            OrderArg::Target => ChecklistOrder::Target,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(val: DirectionArg) -> Self {
        match val {
            DirectionArg::Asc => SortDirection::Ascending,
            DirectionArg::Desc => SortDirection::Descending,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ItemOrderArg {
    /// Stored order
    Stored,
    Name,
    /// High priority first
    Priority,
    /// Unchecked first
    Status,
}

impl From<ItemOrderArg> for ItemOrder {
    fn from(val: ItemOrderArg) -> Self {
        match val {
            ItemOrderArg::Stored => ItemOrder::Stored,
            ItemOrderArg::Name => ItemOrder::Name,
            ItemOrderArg::Priority => ItemOrder::Priority,
            ItemOrderArg::Status => ItemOrder::Status,
        }
    }
}
