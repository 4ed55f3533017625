mod gallery;
pub use gallery::Gallery;

mod camera;
pub use camera::Camera;
