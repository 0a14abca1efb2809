use anyhow::Result;

use crate::alphabet::PasswordKind;
use crate::strength;

/// Rate a password policy without generating a password. The alphabet
/// comes either from a kind tag or from a raw symbol count.
pub fn run(kind: Option<PasswordKind>, alphabet_size: Option<usize>, length: usize) -> Result<()> {
    let size = match (kind, alphabet_size) {
        (Some(kind), _) => kind.alphabet().len(),
        (None, Some(size)) => size,
        // clap requires one of the two
        (None, None) => unreachable!("argument group guarantees an alphabet"),
    };

    let assessment = strength::classify(size, length);

    println!("Alphabet size: {size}");
    println!("Length: {length}");
    println!("Entropy in bits: {:.1}", assessment.entropy_bits);
    println!(
        "Strength: {} ({})",
        assessment.tier,
        assessment.tier.description()
    );

    Ok(())
}
