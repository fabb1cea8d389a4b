/// Create the 3x3 mean kernel with every weight equal to 1/9.
pub fn mean_kernel3() -> [[f32; 3]; 3] {
    [[1.0 / 9.0; 3]; 3]
}

/// Create the 3x3 gaussian kernel [[1,2,1],[2,4,2],[1,2,1]] / 16.
pub fn gaussian_kernel3() -> [[f32; 3]; 3] {
    [
        [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
        [2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0],
        [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
    ]
}
