#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub const HGNC: &str = "HGNC ID\tApproved Symbol\tApproved Name\tStatus\tPrevious Symbols\tAliases
1\tTP53\ttumor protein p53\tApproved\t\t
2\tMYC\tv-myc myelocytomatosis viral oncogene homolog\tApproved\t\tc-Myc
3\tGATA1\tGATA binding protein 1\tApproved\t\t
";

pub const MATRICES: &str = "AC  M0001
NA  c-Myc
//
AC  M0002
BF  T00306 GATA-1; Species: human, Homo sapiens.
//
";

pub const CHROMOSOME: &str = "LOCUS       NT_1 1000 bp
FEATURES             Location/Qualifiers
     gene            100..200
                     /db_xref=\"HGNC:1\"
//
LOCUS       NT_2 1000 bp
FEATURES             Location/Qualifiers
     gene            complement(500..800)
                     /db_xref=\"HGNC:2\"
//
";

pub const NT_1: &str = "LOCUS       NT_1
FEATURES             Location/Qualifiers
     TFBS            50..60
                     /db_xref=\"TRANSFAC:M0001\"
                     /probability=\"0.5\"
     TFBS            60..70
                     /db_xref=\"TRANSFAC:M0002\"
                     /probability=\"0.25\"
//
";

pub const NT_2: &str = "LOCUS       NT_2
FEATURES             Location/Qualifiers
     TFBS            complement(900..910)
                     /db_xref=\"TRANSFAC:M0002\"
                     /probability=\"0.75\"
//
";

pub fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Create the database files, an annotation directory and a prediction directory in `root`.
pub fn setup(root: &Path) {
    write(&root.join("hgnc.txt"), HGNC);
    write(&root.join("matrix.dat"), MATRICES);
    write(&root.join("genbank/chr1.gbk"), CHROMOSOME);
    write(&root.join("basetram/chr1/NT_1"), NT_1);
    write(&root.join("basetram/chr1/NT_2"), NT_2);
}

/// `tfnet-build` with all database options pointing into `root`.
pub fn build_command(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tfnet-build").unwrap();
    cmd.arg("--basetram")
        .arg(root.join("basetram"))
        .arg("--genbank")
        .arg(root.join("genbank"))
        .arg("--hgnc")
        .arg(root.join("hgnc.txt"))
        .arg("--matrices")
        .arg(root.join("matrix.dat"));
    cmd
}

/// Runs `tfnet-perturb` on `model` and returns its stdout.
pub fn run_perturb(
    model: &Path,
    operator: &str,
    params: &str,
    seed: u64,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("tfnet-perturb")?;
    cmd.arg("--model")
        .arg(model)
        .arg("--operator")
        .arg(operator)
        .arg("--params")
        .arg(params)
        .arg("--seed")
        .arg(seed.to_string());
    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}
