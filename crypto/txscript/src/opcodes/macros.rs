/// Declares the opcode table.
///
/// `data` entries only get a constant in [`codes`]. `named` entries also get
/// a mnemonic returned by `opcode_name`; bytes outside the table are
/// `OP_UNKNOWN`.
macro_rules! opcode_list {
    (
        data { $( $data_name:ident = $data_num:literal ),* $(,)? }
        named { $( $name:ident = $num:literal => $text:literal ),* $(,)? }
    ) => {
        pub mod codes {
            $(
                #[allow(non_upper_case_globals)]
                #[allow(dead_code)]
                pub const $data_name: u8 = $data_num;
            )*
            $(
                #[allow(non_upper_case_globals)]
                #[allow(dead_code)]
                pub const $name: u8 = $num;
            )*
        }

        /// Returns the standard mnemonic of an opcode
        pub fn opcode_name(opcode: u8) -> &'static str {
            match opcode {
                $(
                    $num => $text,
                )*
                _ => "OP_UNKNOWN",
            }
        }
    };
}
