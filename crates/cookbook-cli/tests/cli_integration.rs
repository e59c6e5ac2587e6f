//! Integration tests for cookbook-cli
//!
//! These tests verify the CLI commands work end-to-end against a temporary
//! database. Tests run serially to avoid database lock conflicts.

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Get a Command for the cookbook binary
fn cookbook() -> Command {
    Command::cargo_bin("cookbook").unwrap()
}

/// Get a Command pointed at a database inside the given temp dir
fn cookbook_with_db(dir: &TempDir) -> Command {
    let mut cmd = cookbook();
    cmd.env(
        "COOKBOOK_DB_PATH",
        dir.path().join("cookbook.db").to_string_lossy().to_string(),
    );
    cmd
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
#[serial]
fn test_cli_help() {
    cookbook()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cookbook"))
        .stdout(predicate::str::contains("COMMAND").or(predicate::str::contains("Commands")));
}

#[test]
#[serial]
fn test_cli_version() {
    cookbook()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cookbook"));
}

#[test]
#[serial]
fn test_recipe_help() {
    cookbook()
        .args(["recipe", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recipe"));
}

#[test]
#[serial]
fn test_browse_help() {
    cookbook()
        .args(["browse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"));
}

// =============================================================================
// Recipe Flow Tests
// =============================================================================

#[test]
#[serial]
fn test_recipe_add_list_show_delete() {
    let dir = TempDir::new().unwrap();

    cookbook_with_db(&dir)
        .args([
            "recipe",
            "add",
            "--name",
            "Pizza",
            "--instructions",
            "Bake it",
            "--ingredient",
            "Cheese:200g",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created recipe 1"));

    cookbook_with_db(&dir)
        .args(["recipe", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pizza"))
        .stdout(predicate::str::contains("cheese"));

    // Keyword matching an ingredient name still finds the recipe
    cookbook_with_db(&dir)
        .args(["recipe", "list", "chee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pizza"));

    cookbook_with_db(&dir)
        .args(["recipe", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pizza"))
        .stdout(predicate::str::contains("cheese (200g)"));

    // Without --force, delete only previews
    cookbook_with_db(&dir)
        .args(["recipe", "delete", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("--force"));

    cookbook_with_db(&dir)
        .args(["recipe", "delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted recipe 1"));

    cookbook_with_db(&dir)
        .args(["recipe", "show", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not found"));
}

#[test]
#[serial]
fn test_recipe_add_requires_ingredients() {
    let dir = TempDir::new().unwrap();

    cookbook_with_db(&dir)
        .args(["recipe", "add", "--name", "Pizza", "--instructions", "Bake it"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ingredient"));

    // Nothing was persisted
    cookbook_with_db(&dir)
        .args(["recipe", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found"));
}

#[test]
#[serial]
fn test_recipe_list_json_format() {
    let dir = TempDir::new().unwrap();

    cookbook_with_db(&dir)
        .args([
            "recipe",
            "add",
            "--name",
            "Toast",
            "--instructions",
            "Toast it",
            "--ingredient",
            "Bread",
            "--quiet",
        ])
        .assert()
        .success();

    cookbook_with_db(&dir)
        .args(["recipe", "list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Toast\""));
}

#[test]
#[serial]
fn test_recipe_ingredients_lists_orphans() {
    let dir = TempDir::new().unwrap();

    cookbook_with_db(&dir)
        .args([
            "recipe",
            "add",
            "--name",
            "Soup",
            "--instructions",
            "Boil",
            "--ingredient",
            "Water:1l",
            "--quiet",
        ])
        .assert()
        .success();

    cookbook_with_db(&dir)
        .args(["recipe", "delete", "1", "--force", "--quiet"])
        .assert()
        .success();

    // The ingredient row outlives its recipe
    cookbook_with_db(&dir)
        .args(["recipe", "ingredients"])
        .assert()
        .success()
        .stdout(predicate::str::contains("water"));
}
