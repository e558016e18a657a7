use anyhow::Result;
use proc_macro2::Literal;
use quote::quote;
use std::{
    fs::OpenOptions,
    io::Write,
    path::Path,
};

use crate::Overlay;

/// Name of the generated module, relative to the output directory.
pub const IP_TABLE_FILENAME: &str = "ip_table.rs";

/// Validates the overlay and writes every generated module into `out_dir`.
pub fn generate_modules<P: AsRef<Path>>(out_dir: P, overlay: &Overlay) -> Result<()> {
    overlay.validate()?;
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(out_dir.as_ref().join(IP_TABLE_FILENAME))?;
    generate_ip_table(overlay, &mut file)
}

/// Generates the device table the driver resolves hardware blocks from.
/// The output expects an `IpEntry` type to be in scope where it is included.
pub fn generate_ip_table<W: Write>(overlay: &Overlay, writer: &mut W) -> Result<()> {
    let overlay_name = &overlay.name;
    let names = overlay.ip_blocks.iter().map(|b| &b.name);
    let addresses = overlay.ip_blocks.iter().map(|b| Literal::u64_unsuffixed(b.phys_addr));
    let ranges = overlay.ip_blocks.iter().map(|b| Literal::u64_unsuffixed(b.addr_range));

    let code = quote! {
        /// Name of the overlay this table was generated from.
        pub const OVERLAY_NAME: &str = #overlay_name;

        /// Hardware blocks present in the programmable logic.
        pub const IP_TABLE: &[IpEntry] = &[
            #(IpEntry { name: #names, phys_addr: #addresses, addr_range: #ranges },)*
        ];
    };

    writer.write_all(format!("{}", code).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::IpBlock;

    #[test]
    fn generated_table_lists_every_block() {
        // Given
        let overlay = Overlay::new(
            "base",
            vec![
                IpBlock { name: "rgbleds_gpio".into(), phys_addr: 1092681728, addr_range: 65536 },
                IpBlock { name: "leds_gpio".into(), phys_addr: 1092812800, addr_range: 65536 },
            ],
        );
        let mut output = Vec::new();

        // When
        generate_ip_table(&overlay, &mut output).unwrap();

        // Then
        let code = String::from_utf8(output).unwrap();
        assert!(code.contains("OVERLAY_NAME"));
        assert!(code.contains("\"base\""));
        assert!(code.contains("\"rgbleds_gpio\""));
        assert!(code.contains("1092681728"));
        assert!(code.contains("\"leds_gpio\""));
        assert!(code.contains("1092812800"));
        assert!(!code.contains("u64"));
    }

    #[test]
    fn invalid_overlays_generate_nothing() {
        let overlay = Overlay::new(
            "broken",
            vec![IpBlock { name: "rgbleds_gpio".into(), phys_addr: 3, addr_range: 16 }],
        );
        let directory = std::env::temp_dir()
            .join(format!("rgbled_config_invalid_overlay_{}", std::process::id()));
        std::fs::create_dir_all(&directory).unwrap();

        let result = generate_modules(&directory, &overlay);
        let generated = directory.join(IP_TABLE_FILENAME).exists();
        std::fs::remove_dir_all(&directory).unwrap();

        assert!(result.is_err());
        assert!(!generated);
    }
}
