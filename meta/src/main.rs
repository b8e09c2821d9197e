fn main() {
    multiversx_sc_meta_lib::cli_main::<multi_choice_governance::AbiProvider>();
}
