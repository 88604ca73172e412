pub mod formatter;

pub use formatter::{
    format_json, format_player_detail, format_results_list, format_standings_table, format_tsv,
    should_use_colors,
};
