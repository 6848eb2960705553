fn main() {
    multiversx_sc_meta_lib::cli_main::<votable_token::AbiProvider>();
}
