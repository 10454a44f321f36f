use std::time::Duration;

pub const TRANSITION_DURATION: Duration = Duration::from_millis(1200); // Slide track transition, shared with the renderer
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(3000);   // Time between automatic advances
pub const SWIPE_THRESHOLD: f32 = 50.0;                                 // Minimum horizontal drag (pixels) that counts as a swipe

pub const MODAL_FADE_DURATION: Duration = Duration::from_millis(300);  // Overlay fade in/out of the image modal

pub const SECTION_OFFSET: f32 = 200.0;                                 // Scroll offset before a section becomes current

pub const TYPING_START_DELAY: Duration = Duration::from_millis(1500);  // Delay before the first character is typed
pub const TYPING_CHAR_DELAY: Duration = Duration::from_millis(100);    // Time per typed character
pub const DELETING_CHAR_DELAY: Duration = Duration::from_millis(50);   // Time per deleted character
pub const TYPING_HOLD: Duration = Duration::from_millis(2000);         // Pause once a phrase is complete
pub const TYPING_NEXT_PHRASE: Duration = Duration::from_millis(500);   // Pause before typing the next phrase

pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);    // Count-up animation length

pub const RENDER_WIDTH: i32 = 1280;                                    // Viewer window width
pub const RENDER_HEIGHT: i32 = 720;                                    // Viewer window height
pub const FPS: u32 = 60;                                               // Frames per second
