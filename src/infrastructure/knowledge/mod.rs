//! Built-in Minecraft knowledge base
//!
//! The rule order below is the dispatch priority. Groups with sub-branches
//! (crafting, mods) are laid out as consecutive rules sharing the group
//! keyword so an unmatched group falls through to the next one.

mod responses;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::entities::{ResponseRule, RuleTable};

pub use responses::{FALLBACK, PREAMBLE};

const CRAFTING: [&str; 2] = ["craft", "recipe"];
const MODS: [&str; 1] = ["mod"];

static MINECRAFT_RULES: Lazy<RuleTable> = Lazy::new(build_rules);

/// The shared, immutable rule table
pub fn minecraft_rules() -> &'static RuleTable {
    &MINECRAFT_RULES
}

fn build_rules() -> RuleTable {
    RuleTable::new()
        // Crafting
        .with(ResponseRule::new("craft-diamond-pickaxe")
            .when_any(CRAFTING)
            .when_any(["diamond pickaxe"])
            .respond_with(responses::DIAMOND_PICKAXE))
        .with(ResponseRule::new("craft-enchanting-table")
            .when_any(CRAFTING)
            .when_any(["enchanting table", "enchantment table"])
            .respond_with(responses::ENCHANTING_TABLE))
        // Mods
        .with(ResponseRule::new("mod-create")
            .when_any(MODS)
            .when_any(["create"])
            .respond_with(responses::CREATE_MOD))
        .with(ResponseRule::new("mod-aether")
            .when_any(MODS)
            .when_any(["aether"])
            .respond_with(responses::AETHER_MOD))
        .with(ResponseRule::new("mod-performance")
            .when_any(MODS)
            .when_any(["optifine", "performance"])
            .respond_with(responses::PERFORMANCE_MODS))
        // Bosses
        .with(ResponseRule::new("ender-dragon")
            .when_any(["ender dragon", "dragon"])
            .respond_with(responses::ENDER_DRAGON))
        .with(ResponseRule::new("wither")
            .when_any(["wither"])
            .respond_with(responses::WITHER))
        .with(ResponseRule::new("update-notes")
            .when_any(["1.20", "update"])
            .respond_with(responses::UPDATE_NOTES))
        .with(ResponseRule::new("redstone")
            .when_any(["redstone"])
            .respond_with(responses::REDSTONE))
        .with(ResponseRule::new("farming")
            .when_any(["farm"])
            .unless_any(MODS)
            .respond_with(responses::FARMING))
        .with(ResponseRule::new("enchanting")
            .when_any(["enchant"])
            .respond_with(responses::ENCHANTING))
}

/// Starter question offered while a conversation is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleQuestion {
    pub question: &'static str,
    pub description: &'static str,
}

pub const EXAMPLE_QUESTIONS: [ExampleQuestion; 4] = [
    ExampleQuestion {
        question: "How do I craft a diamond pickaxe?",
        description: "Learn basic crafting recipes",
    },
    ExampleQuestion {
        question: "What is the Aether mod?",
        description: "Explore popular mods",
    },
    ExampleQuestion {
        question: "How do I defeat the Ender Dragon?",
        description: "Boss battle strategies",
    },
    ExampleQuestion {
        question: "What's new in Minecraft 1.20?",
        description: "Latest updates",
    },
];
