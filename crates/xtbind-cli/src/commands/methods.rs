use crate::error::Result;
use xtbind::engine::method::Method;

pub fn run() -> Result<()> {
    println!("Known method parametrizations:");
    for method in Method::ALL {
        let support = if method.supports_periodic() {
            "molecular and periodic structures"
        } else {
            "molecular structures only"
        };
        println!("  {:<10} {support}", method.to_string());
    }
    println!(
        "\nEvery method produces energy, gradient, partial charges and bond \
         orders;\na dipole is reported for molecular input, a virial for \
         periodic input."
    );
    Ok(())
}
