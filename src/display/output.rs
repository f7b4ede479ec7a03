use crate::draft::board::{DraftSummary, Side, SideSummary};
use crate::draft::catalog::TagCategory;
use crate::draft::tag_cloud::TagCount;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct TagRow {
    category: String,
    tags: String,
}

fn join_labels(tags: &[TagCount]) -> String {
    tags.iter()
        .map(TagCount::label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn category_name(category: TagCategory) -> &'static str {
    match category {
        TagCategory::Gameplay => "Gameplay",
        TagCategory::Spike => "Power Spike",
        TagCategory::Synergy => "Synergy",
    }
}

fn display_side(title: &str, side: &SideSummary) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if side.picks.is_empty() {
        println!("{}", "No picks yet.".yellow());
    } else {
        println!("{} {}", "Picks:".bold(), side.picks.join(", "));
    }

    if side.tags.is_empty() {
        println!("{}", "No tags highlighted yet.".dimmed());
    } else {
        let mut rows = vec![];
        for group in side.tags.groups() {
            if group.category == TagCategory::Gameplay {
                let (first, second) = side.tags.gameplay_rows();
                rows.push(TagRow {
                    category: category_name(group.category).to_string(),
                    tags: join_labels(first),
                });
                if !second.is_empty() {
                    rows.push(TagRow {
                        category: String::new(),
                        tags: join_labels(second),
                    });
                }
            } else {
                rows.push(TagRow {
                    category: category_name(group.category).to_string(),
                    tags: join_labels(&group.tags),
                });
            }
        }

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    println!("{} {}", "Score:".bold(), side.score);
}

pub fn display_draft_board(summary: &DraftSummary) {
    display_side("🛡️  YOUR TEAM", &summary.team);
    display_side("⚔️  ENEMY TEAM", &summary.enemy);

    println!();
    match summary.leader {
        Some(Side::Team) => println!(
            "{} {} vs {}",
            "Your team has the edge:".bold().green(),
            summary.team.score,
            summary.enemy.score
        ),
        Some(Side::Enemy) => println!(
            "{} {} vs {}",
            "Enemy team has the edge:".bold().red(),
            summary.enemy.score,
            summary.team.score
        ),
        None => println!(
            "{} {} vs {}",
            "Even draft:".bold().yellow(),
            summary.team.score,
            summary.enemy.score
        ),
    }
    println!();
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), error);
}
