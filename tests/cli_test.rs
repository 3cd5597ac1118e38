use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn place(cart: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("food-checkout"));
    cmd.arg("place")
        .arg("--cart")
        .arg(cart)
        .arg("--menu")
        .arg("tests/fixtures/menu.csv");
    cmd
}

#[test]
fn test_cli_place_order_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args([
        "place",
        "--cart",
        "tests/fixtures/cart.csv",
        "--menu",
        "tests/fixtures/menu.csv",
        "--method",
        "credit_card",
        "--card",
        "4242424242424242",
        "--cvv",
        "123",
        "--order-id",
        "Order001",
        "--date",
        "2023-09-15",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Payment successful, Order confirmed"))
        .stdout(predicate::str::contains("order_id,items,total,status,date"))
        .stdout(predicate::str::contains(
            "Order001,Pizza x2;Burger x1,28.5,confirmed,2023-09-15",
        ));

    Ok(())
}

#[test]
fn test_cli_unavailable_item() {
    let mut cart = NamedTempFile::new().unwrap();
    writeln!(cart, "name, price, quantity").unwrap();
    writeln!(cart, "Pizza, 10.0, 1").unwrap();
    writeln!(cart, "Salad, 5.0, 1").unwrap();

    place(cart.path())
        .args(["--method", "credit_card", "--card", "4242424242424242", "--cvv", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salad is not available"));
}

#[test]
fn test_cli_empty_cart() {
    let mut cart = NamedTempFile::new().unwrap();
    writeln!(cart, "name, price, quantity").unwrap();

    place(cart.path())
        .args(["--method", "credit_card", "--card", "4242424242424242", "--cvv", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cart is empty"));
}

#[test]
fn test_cli_invalid_method_as_json() {
    let mut cart = NamedTempFile::new().unwrap();
    writeln!(cart, "name, price").unwrap();
    writeln!(cart, "Pizza, 10.0").unwrap();

    place(cart.path())
        .args(["--method", "cash", "--card", "4242424242424242", "--cvv", "123", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"accepted":true,"status":"failed_validation","message":"Error: Invalid payment method"}"#,
        ));
}

#[test]
fn test_cli_declined_order_is_not_recorded() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[gateway]").unwrap();
    writeln!(config, "mode = \"decline\"").unwrap();

    let mut cmd = place(std::path::Path::new("tests/fixtures/cart.csv"));
    cmd.arg("--config")
        .arg(config.path())
        .args([
            "--method",
            "credit_card",
            "--card",
            "4242424242424242",
            "--cvv",
            "123",
            "--order-id",
            "Order002",
            "--date",
            "2023-09-16",
        ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Payment failed, please try again"))
        .stdout(predicate::str::contains("Order002").not());
}

#[test]
fn test_cli_gateway_limit_from_config() {
    let mut cart = NamedTempFile::new().unwrap();
    writeln!(cart, "name, price, quantity").unwrap();
    writeln!(cart, "Pizza, 10.0, 11").unwrap();

    let mut cmd = Command::new(cargo_bin!("food-checkout"));
    cmd.args(["--config", "tests/fixtures/checkout.toml", "place", "--restaurant", "Pizza Place"])
        .arg("--cart")
        .arg(cart.path())
        .args(["--method", "credit_card", "--card", "4242424242424242", "--cvv", "123"]);

    // 110.00 is above the configured 100.00 limit
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Payment failed, please try again"));
}

#[test]
fn test_cli_unknown_restaurant_fails() {
    let mut cmd = Command::new(cargo_bin!("food-checkout"));
    cmd.args([
        "--config",
        "tests/fixtures/checkout.toml",
        "place",
        "--restaurant",
        "Noodle Shop",
        "--cart",
        "tests/fixtures/cart.csv",
        "--method",
        "credit_card",
        "--card",
        "4242424242424242",
        "--cvv",
        "123",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Noodle Shop"));
}

#[test]
fn test_cli_search_restaurants() {
    let mut cmd = Command::new(cargo_bin!("food-checkout"));
    cmd.args([
        "search",
        "--config",
        "tests/fixtures/checkout.toml",
        "--location",
        "Downtown",
        "--min-rating",
        "4.2",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("name,cuisine,location,rating"))
        .stdout(predicate::str::contains("Pizza Place,Italian,Downtown,4.5"))
        .stdout(predicate::str::contains("Sushi Bar").not());
}

#[test]
fn test_cli_malformed_cart_line_is_skipped() {
    let mut cart = NamedTempFile::new().unwrap();
    writeln!(cart, "name, price, quantity").unwrap();
    writeln!(cart, "Pizza, ten, 1").unwrap();
    writeln!(cart, "Burger, 8.5, 2").unwrap();

    place(cart.path())
        .args(["--method", "credit_card", "--card", "4242424242424242", "--cvv", "123"])
        .arg("--json")
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping cart line"))
        .stdout(predicate::str::contains("Payment successful, Order confirmed"));
}

#[test]
fn test_cli_cart_line_that_overflows_quantity_is_skipped() {
    let mut cart = NamedTempFile::new().unwrap();
    writeln!(cart, "name, price, quantity").unwrap();
    writeln!(cart, "Burger, 8.5, 1").unwrap();
    writeln!(cart, "Burger, 8.5, 4294967295").unwrap();

    place(cart.path())
        .args(["--method", "credit_card", "--card", "4242424242424242", "--cvv", "123"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping cart line"))
        .stdout(predicate::str::contains("Payment successful, Order confirmed"));
}

#[test]
fn test_cli_search_with_blank_cuisine_lists_everything() {
    let mut cmd = Command::new(cargo_bin!("food-checkout"));
    cmd.args(["search", "--config", "tests/fixtures/checkout.toml", "--cuisine", ""]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Pizza Place"))
        .stdout(predicate::str::contains("Sushi Bar"))
        .stdout(predicate::str::contains("Curry House"));
}

#[test]
fn test_cli_search_without_matches_prints_header() {
    let mut cmd = Command::new(cargo_bin!("food-checkout"));
    cmd.args(["search", "--config", "tests/fixtures/checkout.toml", "--cuisine", "Thai"]);

    cmd.assert()
        .success()
        .stdout("name,cuisine,location,rating\n");
}
