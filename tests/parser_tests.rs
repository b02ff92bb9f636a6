use gas_sweep::parser::GasReportParser;

/// A realistic tail of a hardhat test run with the gas-reporter table
const RUNNER_OUTPUT: &str = "\
  Batch settlement
    ✓ commits a full batch (214ms)
    ✓ verifies the proof (182ms)

·------------------------------------|---------------------------|-------------|-----------------------------·
|  Solc version: 0.8.24              ·  Optimizer enabled: true  ·  Runs: 200  ·  Block limit: 30000000 gas  |
·····································|···························|·············|······························
|  Methods                                                                                                   |
·············|·······················|·············|·············|·············|···············|··············
|  Contract  ·  Method               ·  Min        ·  Max        ·  Avg        ·  # calls      ·  usd (avg)  |
·············|·······················|·············|·············|·············|···············|··············
|  NMFT      ·  commitBatch          ·      41203  ·      98452  ·      74827  ·           12  ·          -  |
·············|·······················|·············|·············|·············|···············|··············
|  NMFT      ·  submitProof          ·       9901  ·      12044  ·      10973  ·           12  ·          -  |
·············|·······················|·············|·············|·············|···············|··············
|  Escrow    ·  release              ·      21000  ·      21000  ·      21000  ·            2  ·          -  |
·------------|-----------------------|-------------|-------------|-------------|---------------|-------------·

  2 passing (3s)
";

#[test]
fn test_scrapes_all_rows_for_contract() {
    let parser = GasReportParser::new("NMFT").unwrap();
    let entries = parser.parse_output(RUNNER_OUTPUT);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].method, "commitBatch");
    assert_eq!(entries[0].avg_gas, 74827);
    assert_eq!(entries[1].method, "submitProof");
    assert_eq!(entries[1].avg_gas, 10973);
}

#[test]
fn test_other_contract_rows_are_ignored() {
    let parser = GasReportParser::new("NMFT").unwrap();
    let entries = parser.parse_output(RUNNER_OUTPUT);

    assert!(entries.iter().all(|e| e.method != "release"));
}

#[test]
fn test_contract_anchor_selects_rows() {
    let parser = GasReportParser::new("Escrow").unwrap();
    let entries = parser.parse_output(RUNNER_OUTPUT);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].method, "release");
    assert_eq!(entries[0].avg_gas, 21000);
}

#[test]
fn test_output_without_table_yields_nothing() {
    let parser = GasReportParser::new("NMFT").unwrap();
    let entries = parser.parse_output("  3 passing (2s)\n  1 pending\n");

    assert!(entries.is_empty());
}
