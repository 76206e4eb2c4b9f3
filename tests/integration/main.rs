//! Integration tests for cartstore

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    /// Command isolated to a temp config path and data directory
    fn cartstore(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("cartstore");
        cmd.env("CARTSTORE_CONFIG", temp.path().join("config.toml"))
            .env("CARTSTORE_DATA_DIR", temp.path().join("data"));
        cmd
    }

    fn add(temp: &TempDir, id: &str, title: &str, price: &str) {
        cartstore(temp)
            .args(["add", "--id", id, "--title", title, "--price", price])
            .assert()
            .success();
    }

    fn cart_json(temp: &TempDir) -> serde_json::Value {
        let output = cartstore(temp)
            .args(["list", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).unwrap()
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        cartstore(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Shopping cart"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        cartstore(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("cartstore"));
    }

    #[test]
    fn list_empty() {
        let temp = TempDir::new().unwrap();
        cartstore(&temp)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cart is empty"));

        cartstore(&temp)
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::diff("[]\n"));
    }

    #[test]
    fn add_persists_between_runs() {
        let temp = TempDir::new().unwrap();

        cartstore(&temp)
            .args(["add", "--id", "p1", "--title", "Shirt", "--price", "10"])
            .assert()
            .success()
            .stdout(predicate::str::contains("quantity 1"));

        cartstore(&temp)
            .args(["add", "--id", "p1", "--title", "Shirt", "--price", "10"])
            .assert()
            .success()
            .stdout(predicate::str::contains("quantity 2"));

        let cart = cart_json(&temp);
        assert_eq!(cart.as_array().unwrap().len(), 1);
        assert_eq!(cart[0]["id"], "p1");
        assert_eq!(cart[0]["title"], "Shirt");
        assert_eq!(cart[0]["quantity"], 2);
    }

    #[test]
    fn add_rejects_non_finite_price() {
        let temp = TempDir::new().unwrap();
        add(&temp, "p1", "Shirt", "10");

        cartstore(&temp)
            .args(["add", "--id", "p2", "--title", "Mug", "--price", "inf"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a finite price"));

        let cart = cart_json(&temp);
        assert_eq!(cart.as_array().unwrap().len(), 1);
        assert_eq!(cart[0]["id"], "p1");
    }

    #[test]
    fn list_table_shows_lines_in_order() {
        let temp = TempDir::new().unwrap();
        add(&temp, "p2", "Mug", "4.5");
        add(&temp, "p1", "Shirt", "10");

        cartstore(&temp)
            .arg("list")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Mug")
                    .and(predicate::str::contains("Shirt"))
                    .and(predicate::str::contains("2 product(s), 2 unit(s)")),
            );

        cartstore(&temp)
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::diff("p2\t1\np1\t1\n"));
    }

    #[test]
    fn increment_and_decrement() {
        let temp = TempDir::new().unwrap();
        add(&temp, "p1", "Shirt", "10");

        cartstore(&temp)
            .args(["increment", "p1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("quantity is now 2"));

        cartstore(&temp)
            .args(["decrement", "p1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("quantity is now 1"));

        cartstore(&temp)
            .args(["decrement", "p1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed p1"));

        assert_eq!(cart_json(&temp), serde_json::json!([]));
    }

    #[test]
    fn unknown_id_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        add(&temp, "p1", "Shirt", "10");

        cartstore(&temp)
            .args(["increment", "missing"])
            .assert()
            .success()
            .stdout(predicate::str::contains("missing is not in the cart"));

        cartstore(&temp)
            .args(["decrement", "missing"])
            .assert()
            .success()
            .stdout(predicate::str::contains("missing is not in the cart"));

        let cart = cart_json(&temp);
        assert_eq!(cart.as_array().unwrap().len(), 1);
        assert_eq!(cart[0]["quantity"], 1);
    }

    #[test]
    fn corrupt_storage_starts_empty() {
        let temp = TempDir::new().unwrap();
        add(&temp, "p1", "Shirt", "10");

        let data = temp.path().join("data");
        for entry in std::fs::read_dir(&data).unwrap() {
            std::fs::write(entry.unwrap().path(), "{ not json").unwrap();
        }

        assert_eq!(cart_json(&temp), serde_json::json!([]));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        cartstore(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        cartstore(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[storage]"));
    }

    #[test]
    fn config_set_changes_storage_key() {
        let temp = TempDir::new().unwrap();
        add(&temp, "p1", "Shirt", "10");

        cartstore(&temp)
            .args(["config", "set", "storage.key", "second-cart"])
            .assert()
            .success();

        assert_eq!(cart_json(&temp), serde_json::json!([]));
    }

    #[test]
    fn config_set_does_not_save_data_dir_override() {
        let temp = TempDir::new().unwrap();

        cartstore(&temp)
            .args(["config", "set", "storage.key", "second-cart"])
            .assert()
            .success();

        let saved = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
        assert!(saved.contains("second-cart"));
        assert!(!saved.contains("data_dir"));
    }

    #[test]
    fn config_set_unknown_key_fails() {
        let temp = TempDir::new().unwrap();
        cartstore(&temp)
            .args(["config", "set", "vm.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }

    #[test]
    fn invalid_config_fails_with_hint() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.toml"), "[storage]\nbackend = 1\n").unwrap();

        cartstore(&temp)
            .arg("list")
            .assert()
            .failure()
            .stderr(
                predicate::str::contains("Invalid configuration")
                    .and(predicate::str::contains("Hint:")),
            );
    }
}
