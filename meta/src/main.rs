fn main() {
    multiversx_sc_meta_lib::cli_main::<club_proposal_manager::AbiProvider>();
}
