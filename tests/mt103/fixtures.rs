//! Sample messages shared by the MT103 tests

use std::sync::Once;

/// No user header, single-line body
pub const MESSAGE1: &str = concat!(
    "{1:F01ASDFJK20AXXX0987654321}",
    "{2:I103ASDFJK22XXXXN}",
    "{4: :20:20180101-ABCDEF :23B:GHIJ :32A:180117CAD5432,1 :33B:EUR9999,0 ",
    ":50K:/123456-75901 SOMEWHERE New York 999999 GR :53B:/20100213012345 ",
    ":57C://SC200123 :59:/201001020 First Name Last Name a12345bc6d789ef01a23 Nowhere NL ",
    ":70:test reference test reason payment group: 1234567-ABCDEF :71A:SHA :77B:Test this -}",
);

/// User header with only a message user reference, multi-line body
pub const MESSAGE2: &str = concat!(
    "{1:F01QWERTY22AXXX1234567890}",
    "{2:I103QWERTY33XXXXA7}",
    "{3:{108:MT103}}",
    "{4:\n:20:1234567-8901\n:23B:ABCD\n:32A:000625EUR1000,00\n:33B:EUR1000,00\n",
    ":50K:COMPANY NAME\nNAPLES\n:52A:ABCDEFGH123\n:53A:ABCDEF12\n:54A:ABCDEF1G\n",
    ":57A:ABCDEFGHIJK\n:59:/20061120050500001A01234\nBENEFICIARY NAME\n",
    ":70:/REMITTANCE INFO\n:71A:SHA\n-}",
);

/// Full user header, settlement digits that are not a date
pub const MESSAGE3: &str = concat!(
    "{1:F01QWERTY22AXXX1234567890}",
    "{2:I103QWERTY33XXXXA7}",
    "{3:{113:SEPA}{111:001}{121:d2d62e74-4f7d-45dc-a230-85fa259e1694}}",
    "{4: :20:123456-ABCDEF001 :23B:GHIJ :32A:123456GBP10000,00 :33B:GBP10000,00 ",
    ":50K:/This is arbitrary text :52D:/123456-78900 More arbitrary text ",
    ":53B:/12345678901234 :57C://AB123456 :59:/12345678 Even more arbitrary text ",
    ":70:abc - 12.34 more txt 20190115-ABCDEF :71A:SHA :72:/INS/ABCDEF01 -}",
);

/// Output message with a non-conforming user reference, repeated 71F and a trailer
pub const MESSAGE4: &str = concat!(
    "{1:F01AAAAGRA0AXXX0057000289}",
    "{2:O1030919010321BBBBGRA0AXXX00570001710103210920N}",
    "{3:{108:MT103 003 OF 045}{121:c8b66b47-2bd9-48fe-be90-93c2096f27d2}}",
    "{4:\n:20:5387354\n:23B:CRED\n:23E:PHOB/20.527.19.60\n:32A:000526USD1101,50\n",
    ":33B:USD1121,50\n:50K:FRANZ HOLZAPFEL GMBH\nVIENNA\n:52A:BKAUATWW\n",
    ":59:723491524\nC. KLEIN\nBLOEMENGRACHT 15\nAMSTERDAM\n:71A:SHA\n",
    ":71F:USD10,\n:71F:USD10,\n:72:/INS/CHASUS33\n-}",
    "{5:{MAC:75D138E4}{CHK:DE1B0D71FA96}}",
);

pub const ALL: [&str; 4] = [MESSAGE1, MESSAGE2, MESSAGE3, MESSAGE4];

static TRACING: Once = Once::new();

/// Route parser logs to the test output (`RUST_LOG=mt10x_rs=trace`)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
