//! Behavioural tests for import remapping.
//!
//! These tests pin down:
//! - Relocation relative to the importing file
//! - The `./` prefix for same-directory destinations
//! - First-match precedence of remapping rules
//! - The literal module path collapse
//! - Pass-through and line count guarantees

use import_remapper::{
    transform_line, transform_source, RemappingEntry, RemappingTable, TransformOptions,
};
use pretty_assertions::assert_eq;

fn interfaces_table() -> RemappingTable {
    RemappingTable::new(vec![RemappingEntry::new(
        "@interfaces/",
        "solidity/interfaces/",
    )])
}

fn transform(line: &str, file_path: &str, table: &RemappingTable) -> String {
    transform_line(line, file_path, table, &TransformOptions::default())
}

#[test]
fn test_relocation_to_parent_directory() {
    assert_eq!(
        transform(
            "import '@interfaces/fees/IFeeManager.sol';",
            "solidity/interfaces/oracle/IOracle.sol",
            &interfaces_table(),
        ),
        "import '../fees/IFeeManager.sol';"
    );
}

#[test]
fn test_relocation_to_same_directory() {
    assert_eq!(
        transform(
            "import '@interfaces/fees/IFeeManager.sol';",
            "solidity/interfaces/IOracle.sol",
            &interfaces_table(),
        ),
        "import './fees/IFeeManager.sol';"
    );
}

#[test]
fn test_relocation_deeply_nested() {
    assert_eq!(
        transform(
            "import {IModule} from \"@interfaces/IModule.sol\";",
            "solidity/interfaces/modules/dispute/IBondEscalationModule.sol",
            &interfaces_table(),
        ),
        "import {IModule} from \"../../IModule.sol\";"
    );
}

#[test]
fn test_first_match_wins_over_more_specific_rule() {
    let table = RemappingTable::new(vec![
        RemappingEntry::new("@x/", "a/"),
        RemappingEntry::new("@x/sub", "b/"),
    ]);
    let options = TransformOptions {
        anchor: "a".to_string(),
        ..TransformOptions::default()
    };

    assert_eq!(
        transform_line("import '@x/sub/Y.sol';", "a/Z.sol", &table, &options),
        "import './sub/Y.sol';"
    );
}

#[test]
fn test_collapse_truncates_inside_relative_prefix() {
    let table = RemappingTable::parse(
        "@interfaces/=solidity/interfaces/\n@openzeppelin/=node_modules/@openzeppelin/\n",
    );

    // The rewritten line is `import '../../../node_modules/@openzeppelin/...'`;
    // the collapse keeps everything up to the first `.` of `../`.
    assert_eq!(
        transform(
            "import '@openzeppelin/contracts/token/ERC20/IERC20.sol';",
            "solidity/interfaces/oracle/IOracle.sol",
            &table,
        ),
        "import '.@openzeppelin/contracts/token/ERC20/IERC20.sol';"
    );
}

#[test]
fn test_collapse_truncates_at_earlier_dot() {
    let table = RemappingTable::parse("lib/=solidity/node_modules/lib/\n");

    // A `.` before the path wins over the marker position.
    assert_eq!(
        transform(
            "import {Errors.Code} from 'lib/Errors.sol';",
            "solidity/IRoot.sol",
            &table,
        ),
        "import {Errors.lib/Errors.sol';"
    );
}

#[test]
fn test_non_import_lines_pass_through() {
    let table = interfaces_table();
    let lines = [
        "// SPDX-License-Identifier: MIT",
        "pragma solidity ^0.8.19;",
        "",
        "  /// @notice see @interfaces/IOracle.sol",
        "interface IOracle {",
        "  function importData() external;",
        "}",
    ];

    for line in lines {
        assert_eq!(
            transform(line, "solidity/interfaces/oracle/IOracle.sol", &table),
            line
        );
    }
}

#[test]
fn test_imports_without_matching_rule_pass_through() {
    let table = interfaces_table();
    let lines = [
        "import './IModule.sol';",
        "import {IERC20} from 'openzeppelin/token/IERC20.sol';",
        "IMPORT \"../IRequest.sol\";",
    ];

    for line in lines {
        assert_eq!(
            transform(line, "solidity/interfaces/oracle/IOracle.sol", &table),
            line
        );
    }
}

#[test]
fn test_transform_is_idempotent_once_rewritten() {
    let table = interfaces_table();
    let file_path = "solidity/interfaces/oracle/IOracle.sol";

    let once = transform("import '@interfaces/IModule.sol';", file_path, &table);
    let twice = transform(&once, file_path, &table);

    assert_eq!(once, "import '../IModule.sol';");
    assert_eq!(twice, once);
}

#[test]
fn test_line_count_is_preserved() {
    let table = RemappingTable::parse(
        "@interfaces/=solidity/interfaces/\n@openzeppelin/=node_modules/@openzeppelin/\n",
    );
    let sources = [
        "",
        "\n",
        "import '@interfaces/IModule.sol';",
        "import '@interfaces/IModule.sol';\nimport '@openzeppelin/IERC20.sol';\n\n",
        "\n\n\ninterface IOracle {}\n",
    ];

    for source in sources {
        let result = transform_source(
            source,
            "solidity/interfaces/oracle/IOracle.sol",
            &table,
            &TransformOptions::default(),
        );
        let input_lines = source.split('\n').count();
        assert_eq!(result.line_count, input_lines);
        assert_eq!(result.text.split('\n').count(), input_lines);
    }
}

#[test]
fn test_missing_anchor_is_not_an_error() {
    let result = transform(
        "import '@interfaces/IModule.sol';",
        "contracts/oracle/IOracle.sol",
        &interfaces_table(),
    );
    assert_eq!(result, "import 'IOracle.sol/IModule.sol';");
}
