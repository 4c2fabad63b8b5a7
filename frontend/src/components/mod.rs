pub mod match_detail_modal;
