pub mod cross_fade;
pub mod directional_slide;
pub mod letterbox;
pub mod screen_wipe;
pub mod transition_animation;
