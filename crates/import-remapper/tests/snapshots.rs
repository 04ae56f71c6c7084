//! Snapshot tests for whole-file import remapping.

use import_remapper::{transform_source, RemappingTable, TransformOptions};

const REMAPPINGS: &str = "\
@interfaces/=solidity/interfaces/
@contracts/=solidity/contracts/
@openzeppelin/=node_modules/@openzeppelin/
";

fn remap_snapshot(file_path: &str, source: &str) -> String {
    let table = RemappingTable::parse(REMAPPINGS);
    transform_source(source, file_path, &table, &TransformOptions::default()).text
}

#[test]
fn test_nested_interface() {
    let output = remap_snapshot(
        "solidity/interfaces/modules/resolution/IArbitratorModule.sol",
        "// SPDX-License-Identifier: MIT
pragma solidity ^0.8.19;

import {IOracle} from '@interfaces/IOracle.sol';
import {IResolutionModule} from '@interfaces/core/modules/resolution/IResolutionModule.sol';
import {IArbitrator} from './IArbitrator.sol';
  import {Helpers} from \"@contracts/utils/Helpers.sol\";

/// @notice Resolves disputes through @interfaces/IArbitrator.sol
interface IArbitratorModule is IResolutionModule {
  function getStatus(bytes32 _disputeId) external view returns (uint8 _status);
}",
    );

    insta::assert_snapshot!(output, @r#"
    // SPDX-License-Identifier: MIT
    pragma solidity ^0.8.19;

    import {IOracle} from '../../IOracle.sol';
    import {IResolutionModule} from '../../core/modules/resolution/IResolutionModule.sol';
    import {IArbitrator} from './IArbitrator.sol';
      import {Helpers} from "../../../contracts/utils/Helpers.sol";

    /// @notice Resolves disputes through @interfaces/IArbitrator.sol
    interface IArbitratorModule is IResolutionModule {
      function getStatus(bytes32 _disputeId) external view returns (uint8 _status);
    }
    "#);
}

#[test]
fn test_root_interface_with_package_import() {
    let output = remap_snapshot(
        "solidity/interfaces/IOracle.sol",
        "pragma solidity ^0.8.19;

import {IERC20} from '@openzeppelin/contracts/token/ERC20/IERC20.sol';
import {IModule} from '@interfaces/IModule.sol';

interface IOracle {}",
    );

    insta::assert_snapshot!(output, @r"
    pragma solidity ^0.8.19;

    import {IERC20} from '.@openzeppelin/contracts/token/ERC20/IERC20.sol';
    import {IModule} from './IModule.sol';

    interface IOracle {}
    ");
}
