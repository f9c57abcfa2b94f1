//! End-to-end tests for `aacboard inspect`, `category` and `item` commands.

use serde::Deserialize;
use std::process::Command;

mod fixtures;
use fixtures::*;

#[derive(Debug, Deserialize)]
struct CategorySummary {
    image: String,
    name: String,
    items: usize,
}

#[derive(Debug, Deserialize)]
struct InspectResponse {
    categories: Vec<CategorySummary>,
    count: usize,
}

#[derive(Debug, Deserialize)]
struct ItemEntry {
    image: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ListItemsResponse {
    category: String,
    items: Vec<ItemEntry>,
    count: usize,
}

/// Path to the aacboard binary (set by cargo at compile time)
fn aacboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_aacboard")
}

// ============================================================================
// Inspect
// ============================================================================

#[test]
fn test_inspect_json() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = Command::new(aacboard_bin())
        .args(["inspect", "--json", "--board", board_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let response: InspectResponse =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(response.count, 2);
    assert_eq!(response.categories[0].image, "img/food/plate.png");
    assert_eq!(response.categories[0].name, "food");
    assert_eq!(response.categories[0].items, 2);
    assert_eq!(response.categories[1].name, "clothing");
    assert_eq!(response.categories[1].items, 1);
}

#[test]
fn test_inspect_empty_board() {
    let (board_path, _temp_dir) = create_temp_board_file("");

    let output = Command::new(aacboard_bin())
        .args(["inspect", "--board", board_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no categories"));
}

// ============================================================================
// Category commands
// ============================================================================

#[test]
fn test_category_list() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = Command::new(aacboard_bin())
        .args([
            "category",
            "list",
            "--board",
            board_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("food"));
    assert!(stdout.contains("clothing"));
}

#[test]
fn test_category_add_persists() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = Command::new(aacboard_bin())
        .args([
            "category",
            "add",
            "--board",
            board_path.to_str().unwrap(),
            "--image",
            "img/animals/dog.png",
            "--name",
            "animals",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // The category is there on a fresh read of the file
    let content = std::fs::read_to_string(&board_path).unwrap();
    assert!(content.contains("img/animals/dog.png animals\n"));
}

#[test]
fn test_category_add_empty_name_rejected() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = Command::new(aacboard_bin())
        .args([
            "category",
            "add",
            "--board",
            board_path.to_str().unwrap(),
            "--image",
            "img/animals/dog.png",
            "--name",
            "",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));

    // The file is untouched
    let content = std::fs::read_to_string(&board_path).unwrap();
    assert_eq!(content, SAMPLE_BOARD);
}

// ============================================================================
// Item commands
// ============================================================================

#[test]
fn test_item_list_json() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = Command::new(aacboard_bin())
        .args([
            "item",
            "list",
            "--json",
            "--board",
            board_path.to_str().unwrap(),
            "--category",
            "img/food/plate.png",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let response: ListItemsResponse =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(response.category, "food");
    assert_eq!(response.count, 2);
    assert_eq!(response.items[0].image, "img/food/fries.png");
    assert_eq!(response.items[0].text, "french fries");
    assert_eq!(response.items[1].image, "img/food/watermelon.png");
    assert_eq!(response.items[1].text, "watermelon");
}

#[test]
fn test_item_add_persists() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = Command::new(aacboard_bin())
        .args([
            "item",
            "add",
            "--board",
            board_path.to_str().unwrap(),
            "--category",
            "img/food/plate.png",
            "--image",
            "img/food/pizza.png",
            "--text",
            "cheese pizza",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let content = std::fs::read_to_string(&board_path).unwrap();
    assert!(content.contains(">img/food/pizza.png cheese pizza\n"));
    // The item lands inside the food category, before the clothing line
    let pizza_at = content.find(">img/food/pizza.png").unwrap();
    let clothing_at = content.find("img/clothing/hanger.png").unwrap();
    assert!(pizza_at < clothing_at);
}

#[test]
fn test_item_add_unknown_category() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = Command::new(aacboard_bin())
        .args([
            "item",
            "add",
            "--board",
            board_path.to_str().unwrap(),
            "--category",
            "img/unknown.png",
            "--image",
            "img/x.png",
            "--text",
            "x",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No category"));
}

#[test]
fn test_item_list_unknown_category() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = Command::new(aacboard_bin())
        .args([
            "item",
            "list",
            "--board",
            board_path.to_str().unwrap(),
            "--category",
            "img/unknown.png",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
}
