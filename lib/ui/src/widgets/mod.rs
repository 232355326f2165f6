pub mod score_slider;
