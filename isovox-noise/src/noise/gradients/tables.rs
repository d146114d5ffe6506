//! Literal gradient data.
//!
//! 2D: 256 points at `(i + 0.5) * 2π / 256`.
//! 3D: the 32 rhombic triacontahedron vertices, padded to stride 4, eight times over.
//! 4D to 6D: 256 vectors seeded from a generalized golden-ratio sequence and
//! relaxed by a fixed number of pairwise repulsion steps.
//! 5D and 6D are padded to stride 8.

#![allow(clippy::unreadable_literal, clippy::excessive_precision)]

pub(super) static GRADIENTS_2D: [f32; 512] = [
    0.9999247, 0.012271538,
    0.99932235, 0.036807224,
    0.9981181, 0.061320737,
    0.9963126, 0.08579731,
    0.993907, 0.110222206,
    0.99090266, 0.1345807,
    0.9873014, 0.15885815,
    0.9831055, 0.18303989,
    0.9783174, 0.20711137,
    0.97293997, 0.2310581,
    0.96697646, 0.25486565,
    0.9604305, 0.2785197,
    0.953306, 0.30200595,
    0.9456073, 0.3253103,
    0.937339, 0.34841868,
    0.9285061, 0.3713172,
    0.9191139, 0.39399204,
    0.909168, 0.41642955,
    0.8986745, 0.43861625,
    0.88763964, 0.46053872,
    0.8760701, 0.48218378,
    0.86397284, 0.50353837,
    0.8513552, 0.52458966,
    0.8382247, 0.545325,
    0.8245893, 0.5657318,
    0.81045717, 0.58579785,
    0.7958369, 0.60551107,
    0.7807372, 0.6248595,
    0.76516724, 0.64383155,
    0.7491364, 0.6624158,
    0.7326543, 0.680601,
    0.71573085, 0.69837624,
    0.69837624, 0.71573085,
    0.680601, 0.7326543,
    0.6624158, 0.7491364,
    0.64383155, 0.76516724,
    0.6248595, 0.7807372,
    0.60551107, 0.7958369,
    0.58579785, 0.81045717,
    0.5657318, 0.8245893,
    0.545325, 0.8382247,
    0.52458966, 0.8513552,
    0.50353837, 0.86397284,
    0.48218378, 0.8760701,
    0.46053872, 0.88763964,
    0.43861625, 0.8986745,
    0.41642955, 0.909168,
    0.39399204, 0.9191139,
    0.3713172, 0.9285061,
    0.34841868, 0.937339,
    0.3253103, 0.9456073,
    0.30200595, 0.953306,
    0.2785197, 0.9604305,
    0.25486565, 0.96697646,
    0.2310581, 0.97293997,
    0.20711137, 0.9783174,
    0.18303989, 0.9831055,
    0.15885815, 0.9873014,
    0.1345807, 0.99090266,
    0.110222206, 0.993907,
    0.08579731, 0.9963126,
    0.061320737, 0.9981181,
    0.036807224, 0.99932235,
    0.012271538, 0.9999247,
    -0.012271538, 0.9999247,
    -0.036807224, 0.99932235,
    -0.061320737, 0.9981181,
    -0.08579731, 0.9963126,
    -0.110222206, 0.993907,
    -0.1345807, 0.99090266,
    -0.15885815, 0.9873014,
    -0.18303989, 0.9831055,
    -0.20711137, 0.9783174,
    -0.2310581, 0.97293997,
    -0.25486565, 0.96697646,
    -0.2785197, 0.9604305,
    -0.30200595, 0.953306,
    -0.3253103, 0.9456073,
    -0.34841868, 0.937339,
    -0.3713172, 0.9285061,
    -0.39399204, 0.9191139,
    -0.41642955, 0.909168,
    -0.43861625, 0.8986745,
    -0.46053872, 0.88763964,
    -0.48218378, 0.8760701,
    -0.50353837, 0.86397284,
    -0.52458966, 0.8513552,
    -0.545325, 0.8382247,
    -0.5657318, 0.8245893,
    -0.58579785, 0.81045717,
    -0.60551107, 0.7958369,
    -0.6248595, 0.7807372,
    -0.64383155, 0.76516724,
    -0.6624158, 0.7491364,
    -0.680601, 0.7326543,
    -0.69837624, 0.71573085,
    -0.71573085, 0.69837624,
    -0.7326543, 0.680601,
    -0.7491364, 0.6624158,
    -0.76516724, 0.64383155,
    -0.7807372, 0.6248595,
    -0.7958369, 0.60551107,
    -0.81045717, 0.58579785,
    -0.8245893, 0.5657318,
    -0.8382247, 0.545325,
    -0.8513552, 0.52458966,
    -0.86397284, 0.50353837,
    -0.8760701, 0.48218378,
    -0.88763964, 0.46053872,
    -0.8986745, 0.43861625,
    -0.909168, 0.41642955,
    -0.9191139, 0.39399204,
    -0.9285061, 0.3713172,
    -0.937339, 0.34841868,
    -0.9456073, 0.3253103,
    -0.953306, 0.30200595,
    -0.9604305, 0.2785197,
    -0.96697646, 0.25486565,
    -0.97293997, 0.2310581,
    -0.9783174, 0.20711137,
    -0.9831055, 0.18303989,
    -0.9873014, 0.15885815,
    -0.99090266, 0.1345807,
    -0.993907, 0.110222206,
    -0.9963126, 0.08579731,
    -0.9981181, 0.061320737,
    -0.99932235, 0.036807224,
    -0.9999247, 0.012271538,
    -0.9999247, -0.012271538,
    -0.99932235, -0.036807224,
    -0.9981181, -0.061320737,
    -0.9963126, -0.08579731,
    -0.993907, -0.110222206,
    -0.99090266, -0.1345807,
    -0.9873014, -0.15885815,
    -0.9831055, -0.18303989,
    -0.9783174, -0.20711137,
    -0.97293997, -0.2310581,
    -0.96697646, -0.25486565,
    -0.9604305, -0.2785197,
    -0.953306, -0.30200595,
    -0.9456073, -0.3253103,
    -0.937339, -0.34841868,
    -0.9285061, -0.3713172,
    -0.9191139, -0.39399204,
    -0.909168, -0.41642955,
    -0.8986745, -0.43861625,
    -0.88763964, -0.46053872,
    -0.8760701, -0.48218378,
    -0.86397284, -0.50353837,
    -0.8513552, -0.52458966,
    -0.8382247, -0.545325,
    -0.8245893, -0.5657318,
    -0.81045717, -0.58579785,
    -0.7958369, -0.60551107,
    -0.7807372, -0.6248595,
    -0.76516724, -0.64383155,
    -0.7491364, -0.6624158,
    -0.7326543, -0.680601,
    -0.71573085, -0.69837624,
    -0.69837624, -0.71573085,
    -0.680601, -0.7326543,
    -0.6624158, -0.7491364,
    -0.64383155, -0.76516724,
    -0.6248595, -0.7807372,
    -0.60551107, -0.7958369,
    -0.58579785, -0.81045717,
    -0.5657318, -0.8245893,
    -0.545325, -0.8382247,
    -0.52458966, -0.8513552,
    -0.50353837, -0.86397284,
    -0.48218378, -0.8760701,
    -0.46053872, -0.88763964,
    -0.43861625, -0.8986745,
    -0.41642955, -0.909168,
    -0.39399204, -0.9191139,
    -0.3713172, -0.9285061,
    -0.34841868, -0.937339,
    -0.3253103, -0.9456073,
    -0.30200595, -0.953306,
    -0.2785197, -0.9604305,
    -0.25486565, -0.96697646,
    -0.2310581, -0.97293997,
    -0.20711137, -0.9783174,
    -0.18303989, -0.9831055,
    -0.15885815, -0.9873014,
    -0.1345807, -0.99090266,
    -0.110222206, -0.993907,
    -0.08579731, -0.9963126,
    -0.061320737, -0.9981181,
    -0.036807224, -0.99932235,
    -0.012271538, -0.9999247,
    0.012271538, -0.9999247,
    0.036807224, -0.99932235,
    0.061320737, -0.9981181,
    0.08579731, -0.9963126,
    0.110222206, -0.993907,
    0.1345807, -0.99090266,
    0.15885815, -0.9873014,
    0.18303989, -0.9831055,
    0.20711137, -0.9783174,
    0.2310581, -0.97293997,
    0.25486565, -0.96697646,
    0.2785197, -0.9604305,
    0.30200595, -0.953306,
    0.3253103, -0.9456073,
    0.34841868, -0.937339,
    0.3713172, -0.9285061,
    0.39399204, -0.9191139,
    0.41642955, -0.909168,
    0.43861625, -0.8986745,
    0.46053872, -0.88763964,
    0.48218378, -0.8760701,
    0.50353837, -0.86397284,
    0.52458966, -0.8513552,
    0.545325, -0.8382247,
    0.5657318, -0.8245893,
    0.58579785, -0.81045717,
    0.60551107, -0.7958369,
    0.6248595, -0.7807372,
    0.64383155, -0.76516724,
    0.6624158, -0.7491364,
    0.680601, -0.7326543,
    0.69837624, -0.71573085,
    0.71573085, -0.69837624,
    0.7326543, -0.680601,
    0.7491364, -0.6624158,
    0.76516724, -0.64383155,
    0.7807372, -0.6248595,
    0.7958369, -0.60551107,
    0.81045717, -0.58579785,
    0.8245893, -0.5657318,
    0.8382247, -0.545325,
    0.8513552, -0.52458966,
    0.86397284, -0.50353837,
    0.8760701, -0.48218378,
    0.88763964, -0.46053872,
    0.8986745, -0.43861625,
    0.909168, -0.41642955,
    0.9191139, -0.39399204,
    0.9285061, -0.3713172,
    0.937339, -0.34841868,
    0.9456073, -0.3253103,
    0.953306, -0.30200595,
    0.9604305, -0.2785197,
    0.96697646, -0.25486565,
    0.97293997, -0.2310581,
    0.9783174, -0.20711137,
    0.9831055, -0.18303989,
    0.9873014, -0.15885815,
    0.99090266, -0.1345807,
    0.993907, -0.110222206,
    0.9963126, -0.08579731,
    0.9981181, -0.061320737,
    0.99932235, -0.036807224,
    0.9999247, -0.012271538,
];

pub(super) static GRADIENTS_3D: [f32; 1024] = [
    0.0, 0.5257311, 0.8506508, 0.0,
    0.57735026, 0.57735026, -0.57735026, 0.0,
    0.0, -0.3568221, 0.93417233, 0.0,
    -0.5257311, 0.8506508, 0.0, 0.0,
    0.0, 0.3568221, 0.93417233, 0.0,
    0.5257311, 0.8506508, 0.0, 0.0,
    0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, 0.5257311, 0.0,
    0.57735026, -0.57735026, -0.57735026, 0.0,
    0.93417233, 0.0, -0.3568221, 0.0,
    0.0, -0.5257311, -0.8506508, 0.0,
    0.93417233, 0.0, 0.3568221, 0.0,
    0.0, 0.5257311, -0.8506508, 0.0,
    -0.57735026, 0.57735026, 0.57735026, 0.0,
    0.0, -0.3568221, -0.93417233, 0.0,
    -0.5257311, -0.8506508, 0.0, 0.0,
    0.0, 0.3568221, -0.93417233, 0.0,
    0.5257311, -0.8506508, 0.0, 0.0,
    -0.57735026, 0.57735026, -0.57735026, 0.0,
    -0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, 0.5257311, 0.0,
    -0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, -0.3568221, 0.0,
    0.57735026, 0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, 0.3568221, 0.0,
    0.0, -0.5257311, 0.8506508, 0.0,
    -0.57735026, -0.57735026, -0.57735026, 0.0,
    0.0, 0.5257311, 0.8506508, 0.0,
    0.57735026, 0.57735026, -0.57735026, 0.0,
    0.0, -0.3568221, 0.93417233, 0.0,
    -0.5257311, 0.8506508, 0.0, 0.0,
    0.0, 0.3568221, 0.93417233, 0.0,
    0.5257311, 0.8506508, 0.0, 0.0,
    0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, 0.5257311, 0.0,
    0.57735026, -0.57735026, -0.57735026, 0.0,
    0.93417233, 0.0, -0.3568221, 0.0,
    0.0, -0.5257311, -0.8506508, 0.0,
    0.93417233, 0.0, 0.3568221, 0.0,
    0.0, 0.5257311, -0.8506508, 0.0,
    -0.57735026, 0.57735026, 0.57735026, 0.0,
    0.0, -0.3568221, -0.93417233, 0.0,
    -0.5257311, -0.8506508, 0.0, 0.0,
    0.0, 0.3568221, -0.93417233, 0.0,
    0.5257311, -0.8506508, 0.0, 0.0,
    -0.57735026, 0.57735026, -0.57735026, 0.0,
    -0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, 0.5257311, 0.0,
    -0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, -0.3568221, 0.0,
    0.57735026, 0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, 0.3568221, 0.0,
    0.0, -0.5257311, 0.8506508, 0.0,
    -0.57735026, -0.57735026, -0.57735026, 0.0,
    0.0, 0.5257311, 0.8506508, 0.0,
    0.57735026, 0.57735026, -0.57735026, 0.0,
    0.0, -0.3568221, 0.93417233, 0.0,
    -0.5257311, 0.8506508, 0.0, 0.0,
    0.0, 0.3568221, 0.93417233, 0.0,
    0.5257311, 0.8506508, 0.0, 0.0,
    0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, 0.5257311, 0.0,
    0.57735026, -0.57735026, -0.57735026, 0.0,
    0.93417233, 0.0, -0.3568221, 0.0,
    0.0, -0.5257311, -0.8506508, 0.0,
    0.93417233, 0.0, 0.3568221, 0.0,
    0.0, 0.5257311, -0.8506508, 0.0,
    -0.57735026, 0.57735026, 0.57735026, 0.0,
    0.0, -0.3568221, -0.93417233, 0.0,
    -0.5257311, -0.8506508, 0.0, 0.0,
    0.0, 0.3568221, -0.93417233, 0.0,
    0.5257311, -0.8506508, 0.0, 0.0,
    -0.57735026, 0.57735026, -0.57735026, 0.0,
    -0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, 0.5257311, 0.0,
    -0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, -0.3568221, 0.0,
    0.57735026, 0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, 0.3568221, 0.0,
    0.0, -0.5257311, 0.8506508, 0.0,
    -0.57735026, -0.57735026, -0.57735026, 0.0,
    0.0, 0.5257311, 0.8506508, 0.0,
    0.57735026, 0.57735026, -0.57735026, 0.0,
    0.0, -0.3568221, 0.93417233, 0.0,
    -0.5257311, 0.8506508, 0.0, 0.0,
    0.0, 0.3568221, 0.93417233, 0.0,
    0.5257311, 0.8506508, 0.0, 0.0,
    0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, 0.5257311, 0.0,
    0.57735026, -0.57735026, -0.57735026, 0.0,
    0.93417233, 0.0, -0.3568221, 0.0,
    0.0, -0.5257311, -0.8506508, 0.0,
    0.93417233, 0.0, 0.3568221, 0.0,
    0.0, 0.5257311, -0.8506508, 0.0,
    -0.57735026, 0.57735026, 0.57735026, 0.0,
    0.0, -0.3568221, -0.93417233, 0.0,
    -0.5257311, -0.8506508, 0.0, 0.0,
    0.0, 0.3568221, -0.93417233, 0.0,
    0.5257311, -0.8506508, 0.0, 0.0,
    -0.57735026, 0.57735026, -0.57735026, 0.0,
    -0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, 0.5257311, 0.0,
    -0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, -0.3568221, 0.0,
    0.57735026, 0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, 0.3568221, 0.0,
    0.0, -0.5257311, 0.8506508, 0.0,
    -0.57735026, -0.57735026, -0.57735026, 0.0,
    0.0, 0.5257311, 0.8506508, 0.0,
    0.57735026, 0.57735026, -0.57735026, 0.0,
    0.0, -0.3568221, 0.93417233, 0.0,
    -0.5257311, 0.8506508, 0.0, 0.0,
    0.0, 0.3568221, 0.93417233, 0.0,
    0.5257311, 0.8506508, 0.0, 0.0,
    0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, 0.5257311, 0.0,
    0.57735026, -0.57735026, -0.57735026, 0.0,
    0.93417233, 0.0, -0.3568221, 0.0,
    0.0, -0.5257311, -0.8506508, 0.0,
    0.93417233, 0.0, 0.3568221, 0.0,
    0.0, 0.5257311, -0.8506508, 0.0,
    -0.57735026, 0.57735026, 0.57735026, 0.0,
    0.0, -0.3568221, -0.93417233, 0.0,
    -0.5257311, -0.8506508, 0.0, 0.0,
    0.0, 0.3568221, -0.93417233, 0.0,
    0.5257311, -0.8506508, 0.0, 0.0,
    -0.57735026, 0.57735026, -0.57735026, 0.0,
    -0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, 0.5257311, 0.0,
    -0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, -0.3568221, 0.0,
    0.57735026, 0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, 0.3568221, 0.0,
    0.0, -0.5257311, 0.8506508, 0.0,
    -0.57735026, -0.57735026, -0.57735026, 0.0,
    0.0, 0.5257311, 0.8506508, 0.0,
    0.57735026, 0.57735026, -0.57735026, 0.0,
    0.0, -0.3568221, 0.93417233, 0.0,
    -0.5257311, 0.8506508, 0.0, 0.0,
    0.0, 0.3568221, 0.93417233, 0.0,
    0.5257311, 0.8506508, 0.0, 0.0,
    0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, 0.5257311, 0.0,
    0.57735026, -0.57735026, -0.57735026, 0.0,
    0.93417233, 0.0, -0.3568221, 0.0,
    0.0, -0.5257311, -0.8506508, 0.0,
    0.93417233, 0.0, 0.3568221, 0.0,
    0.0, 0.5257311, -0.8506508, 0.0,
    -0.57735026, 0.57735026, 0.57735026, 0.0,
    0.0, -0.3568221, -0.93417233, 0.0,
    -0.5257311, -0.8506508, 0.0, 0.0,
    0.0, 0.3568221, -0.93417233, 0.0,
    0.5257311, -0.8506508, 0.0, 0.0,
    -0.57735026, 0.57735026, -0.57735026, 0.0,
    -0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, 0.5257311, 0.0,
    -0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, -0.3568221, 0.0,
    0.57735026, 0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, 0.3568221, 0.0,
    0.0, -0.5257311, 0.8506508, 0.0,
    -0.57735026, -0.57735026, -0.57735026, 0.0,
    0.0, 0.5257311, 0.8506508, 0.0,
    0.57735026, 0.57735026, -0.57735026, 0.0,
    0.0, -0.3568221, 0.93417233, 0.0,
    -0.5257311, 0.8506508, 0.0, 0.0,
    0.0, 0.3568221, 0.93417233, 0.0,
    0.5257311, 0.8506508, 0.0, 0.0,
    0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, 0.5257311, 0.0,
    0.57735026, -0.57735026, -0.57735026, 0.0,
    0.93417233, 0.0, -0.3568221, 0.0,
    0.0, -0.5257311, -0.8506508, 0.0,
    0.93417233, 0.0, 0.3568221, 0.0,
    0.0, 0.5257311, -0.8506508, 0.0,
    -0.57735026, 0.57735026, 0.57735026, 0.0,
    0.0, -0.3568221, -0.93417233, 0.0,
    -0.5257311, -0.8506508, 0.0, 0.0,
    0.0, 0.3568221, -0.93417233, 0.0,
    0.5257311, -0.8506508, 0.0, 0.0,
    -0.57735026, 0.57735026, -0.57735026, 0.0,
    -0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, 0.5257311, 0.0,
    -0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, -0.3568221, 0.0,
    0.57735026, 0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, 0.3568221, 0.0,
    0.0, -0.5257311, 0.8506508, 0.0,
    -0.57735026, -0.57735026, -0.57735026, 0.0,
    0.0, 0.5257311, 0.8506508, 0.0,
    0.57735026, 0.57735026, -0.57735026, 0.0,
    0.0, -0.3568221, 0.93417233, 0.0,
    -0.5257311, 0.8506508, 0.0, 0.0,
    0.0, 0.3568221, 0.93417233, 0.0,
    0.5257311, 0.8506508, 0.0, 0.0,
    0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, 0.93417233, 0.0, 0.0,
    0.8506508, 0.0, 0.5257311, 0.0,
    0.57735026, -0.57735026, -0.57735026, 0.0,
    0.93417233, 0.0, -0.3568221, 0.0,
    0.0, -0.5257311, -0.8506508, 0.0,
    0.93417233, 0.0, 0.3568221, 0.0,
    0.0, 0.5257311, -0.8506508, 0.0,
    -0.57735026, 0.57735026, 0.57735026, 0.0,
    0.0, -0.3568221, -0.93417233, 0.0,
    -0.5257311, -0.8506508, 0.0, 0.0,
    0.0, 0.3568221, -0.93417233, 0.0,
    0.5257311, -0.8506508, 0.0, 0.0,
    -0.57735026, 0.57735026, -0.57735026, 0.0,
    -0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, -0.5257311, 0.0,
    0.3568221, -0.93417233, 0.0, 0.0,
    -0.8506508, 0.0, 0.5257311, 0.0,
    -0.57735026, -0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, -0.3568221, 0.0,
    0.57735026, 0.57735026, 0.57735026, 0.0,
    -0.93417233, 0.0, 0.3568221, 0.0,
    0.0, -0.5257311, 0.8506508, 0.0,
    -0.57735026, -0.57735026, -0.57735026, 0.0,
];

pub(super) static GRADIENTS_4D: [f32; 1024] = [
    -0.064942256, -0.25230882, -0.4158618, -0.87131035,
    -0.29839516, 0.8565316, 0.4203054, 0.025637094,
    -0.69156885, 0.25744513, -0.103962645, -0.666818,
    0.57370913, -0.097428724, -0.80009824, 0.14563079,
    0.47782576, -0.58603036, 0.19423048, -0.62492037,
    0.24458322, 0.8903772, -0.1572065, 0.35027647,
    0.16504358, 0.26018286, 0.82070684, -0.48115042,
    -0.3866546, -0.3699224, 0.08748222, 0.8402396,
    -0.40683317, -0.62687343, -0.62618977, -0.22226745,
    -0.6493204, 0.36956546, 0.42238328, 0.5132219,
    0.9861302, 0.108229496, -0.11433037, -0.052556295,
    0.2874324, -0.27548224, -0.56061006, 0.72609127,
    0.16242743, -0.92539614, 0.30393037, -0.15775183,
    -0.06324738, 0.37468302, -0.24948423, -0.8907132,
    -0.027127875, 0.0074728657, 0.99921894, 0.027743917,
    -0.3291804, -0.46972194, 0.12792958, -0.80909556,
    -0.49597558, 0.77453274, -0.35148284, 0.17483458,
    0.7029575, 0.1874576, 0.5115603, -0.45718312,
    0.81244916, -0.05386619, 0.060050156, 0.5774243,
    0.16703933, -0.43054697, -0.8087181, -0.3642831,
    0.08634058, 0.7899633, 0.3718671, 0.4798105,
    -0.4928089, 0.52235216, -0.32400233, -0.61588156,
    -0.3051205, -0.21252158, 0.7954934, 0.47846237,
    -0.79496694, -0.5848207, 0.095946826, -0.12963988,
    0.6292199, 0.4396115, -0.21787201, 0.60279006,
    0.5350536, 0.096835196, 0.8377336, -0.050427627,
    0.33180878, -0.31415153, -0.03850751, -0.8886669,
    -0.108259335, -0.8364532, -0.5306755, 0.08372293,
    -0.24907051, 0.547368, 0.30817074, -0.7371451,
    -0.85475767, -0.08288597, -0.38062903, 0.3429881,
    -0.5618573, -0.09426742, 0.73132783, -0.37495282,
    0.5864402, 0.74810874, 0.117663026, 0.28736147,
    0.55756813, 0.3995075, -0.5128785, -0.5162046,
    0.38461265, -0.057688408, 0.81909287, 0.4217013,
    0.033513475, -0.8851623, 0.083480075, -0.45650375,
    -0.28183654, 0.6098186, -0.5041661, 0.542684,
    -0.7374612, 0.2844937, 0.5508406, -0.2679345,
    -0.66687775, -0.06262738, -0.20118871, 0.7147552,
    0.51271504, -0.5013389, -0.6893816, -0.10264295,
    0.26400813, 0.33967987, 0.15181747, -0.8898701,
    0.5117311, 0.39280105, -0.71018016, 0.281927,
    -0.011823508, -0.25690863, 0.6704999, -0.69590807,
    -0.28988096, -0.9352947, 0.08834748, 0.18272291,
    -0.34355256, 0.3402824, -0.6451783, -0.5915441,
    -0.9050856, 0.050847504, 0.29987615, 0.29716805,
    0.7307943, -0.4999279, -0.03192499, -0.46367288,
    0.26925847, 0.7891334, -0.52413434, 0.17335366,
    0.42880833, 0.53672445, 0.4956049, -0.5314377,
    -0.21062213, -0.07180143, -0.41737694, 0.88106716,
    -0.030604428, -0.4228595, 0.9023125, -0.07800878,
    -0.21055965, 0.6252538, 0.05109593, 0.74974096,
    -0.8632445, 0.22282973, -0.43152714, -0.13762337,
    0.56007886, -0.09777177, 0.36695066, -0.73627406,
    0.64638644, -0.7606481, -0.013638357, 0.058422055,
    0.032937724, 0.54164076, -0.63080907, -0.5546353,
    -0.12591651, 0.48585647, 0.5935835, 0.62908435,
    -0.4125176, -0.45165867, -0.3672152, -0.70070446,
    -0.41123298, -0.501568, 0.7168864, 0.2557162,
    -0.7255229, 0.54087293, 0.050052457, -0.42257285,
    0.75590956, 0.18945993, -0.43908393, 0.44711402,
    0.4959277, -0.3126916, 0.77705646, -0.22904785,
    0.087785505, -0.92631114, 0.07290374, 0.35906324,
    -0.14601868, 0.48440924, -0.84461844, -0.17505985,
    -0.104360476, -0.0146199865, 0.2507226, 0.96230626,
    -0.7110842, -0.643854, -0.28243962, 0.0062525203,
    -0.53300667, 0.38512263, 0.48471183, -0.57674855,
    0.8740319, 0.39774632, 0.2757053, 0.04304351,
    0.42509758, -0.12912458, -0.39259496, -0.8052876,
    0.22446579, -0.5492503, 0.77433056, 0.21988949,
    -0.18420395, 0.8230256, 0.06821854, -0.5329578,
    -0.32118517, 0.24467385, -0.82933456, 0.38623694,
    -0.6845232, -0.3100438, 0.4731451, -0.4598201,
    -0.7394862, -0.51223063, -0.2320839, 0.3700229,
    0.39978844, 0.3995029, -0.805546, -0.17793906,
    0.50892997, 0.13770662, 0.37065002, 0.7646213,
    0.42192453, -0.73844075, -0.3950185, -0.34734038,
    0.08532318, -0.62732995, 0.50887173, 0.5832895,
    -0.6202514, 0.77319974, 0.09276124, 0.094051376,
    -0.35385457, 0.06420885, -0.4409064, -0.8223538,
    -0.79361135, -0.3706655, 0.4792774, 0.055509847,
    0.57910377, 0.65204406, -0.03369238, -0.48820302,
    0.18012041, 0.30128342, -0.91842204, 0.1824443,
    0.23104703, -0.23079416, 0.40098324, -0.8558994,
    -0.1709983, -0.7274017, -0.39854246, 0.53179914,
    -0.17293186, 0.6672168, 0.6665461, -0.28395894,
    -0.73246, 0.18588403, 0.118189774, 0.6441899,
    -0.8637172, -0.16737519, -0.41791707, -0.22654687,
    0.5694303, -0.4478185, 0.6089337, 0.32312155,
    0.54467255, 0.8239442, 0.0721056, -0.13873918,
    0.14570381, 0.075042516, -0.58364344, 0.7952983,
    -0.26151937, -0.7388558, 0.6208444, -0.015871473,
    -0.06337371, -0.6638955, -0.16118406, -0.72749317,
    -0.43421975, 0.46314305, 0.77245414, 0.016320206,
    -0.76087135, 0.07703052, 0.22883753, -0.6023076,
    0.72165763, -0.4084714, -0.5234189, 0.19594392,
    0.2428035, 0.79290813, 0.5072998, -0.23449971,
    0.28956604, 0.68585014, 0.021349633, 0.667312,
    -0.12547934, -0.08361381, -0.87138766, -0.46684813,
    -0.38308477, -0.5810571, 0.4361825, 0.5704065,
    -0.49608302, 0.79743755, -0.14564502, -0.3110989,
    -0.595397, 0.07735625, 0.70864516, 0.3705947,
    0.91838765, -0.17212698, 0.33652356, -0.11699715,
    0.22733404, -0.53500104, -0.27989742, 0.7640357,
    0.2097423, 0.6536797, 0.7251189, 0.053978194,
    -0.13669915, 0.14164323, 0.081013136, -0.97708106,
    -0.34953675, -0.3409234, -0.8624266, 0.13347553,
    -0.2332519, -0.72146606, 0.4204426, -0.49830544,
    -0.9263183, 0.3301016, -0.0443516, 0.17606898,
    0.44458875, 0.0050104815, -0.79177564, -0.41881624,
    0.65867597, -0.40629974, 0.2831593, 0.5664692,
    0.10402683, 0.9480959, -0.21185872, -0.21309246,
    0.09664703, 0.26031566, 0.8732039, 0.40051225,
    -0.6495258, -0.3119036, 0.18392761, -0.66858286,
    -0.49907815, -0.50925446, -0.51623327, 0.4744303,
    -0.79844785, 0.5358453, 0.2604061, -0.086830854,
    0.58590335, 0.11351472, -0.111725666, 0.79457474,
    0.23606066, -0.12827273, -0.9624075, -0.039915785,
    0.06929948, -0.6032362, 0.27820235, -0.74424934,
    -0.10620477, 0.8937312, -0.37406865, 0.22369123,
    -0.34080467, 0.014360191, 0.6556198, -0.6736532,
    -0.88405424, -0.3727579, 0.11599338, 0.2569926,
    -0.68494326, -0.5372985, -0.27739662, -0.4064655,
    0.5909954, 0.49838242, 0.54977626, 0.31636292,
    0.5243932, 0.09219774, -0.09701849, -0.84089166,
    0.03281899, -0.3920682, -0.7524921, 0.5281677,
    -0.0031022478, 0.96514666, 0.23290645, -0.1193184,
    -0.44037405, 0.30900076, -0.29090777, 0.7911775,
    -0.42304584, -0.12910727, 0.8968204, -0.008755824,
    -0.72399724, -0.30021515, 0.08419265, 0.6153133,
    0.59368384, 0.76485187, -0.23878217, 0.074324936,
    0.3052024, 0.15429546, 0.5660304, -0.7501027,
    0.45223042, -0.69437665, -0.25294843, 0.49934536,
    -0.0706524, -0.56022304, -0.5815116, -0.5856643,
    -0.39369386, 0.70307726, 0.46774834, 0.36317897,
    -0.74452174, 0.039883763, -0.39569256, -0.5362127,
    -0.61740077, -0.15812112, -0.72610235, 0.25804922,
    0.5194026, -0.7934716, 0.15339366, -0.2776583,
    0.32490423, 0.6092358, -0.3662785, 0.62378603,
    0.2813383, -0.038725853, 0.9229234, -0.25992587,
    0.028217796, -0.49331963, 0.115663774, 0.861662,
    -0.21866739, 0.80648977, -0.52023506, -0.17639259,
    -0.3573522, 0.32571438, 0.29712248, 0.8233637,
    -0.9857151, -0.10754614, -0.11648601, 0.0568379,
    0.34237114, -0.365619, -0.6084693, -0.61552405,
    0.31192872, 0.8738405, 0.3383883, 0.15683301,
    0.24456108, 0.24597932, -0.4189557, -0.8391425,
    0.034685817, -0.2604593, 0.90560925, 0.33291095,
    -0.44547358, -0.7277078, 0.008276054, -0.52146536,
    -0.5749659, 0.45438546, -0.5949158, 0.33018672,
    -0.934831, -0.055042915, 0.31693244, -0.1503831,
    0.6237204, -0.35360712, -0.1449111, 0.6818619,
    0.113255896, -0.73599637, -0.6465391, -0.16573955,
    0.15270387, 0.4523653, 0.35262722, 0.80479884,
    -0.41801605, -0.05890051, -0.89692223, -0.13161987,
    -0.14671545, -0.31600338, 0.5486496, 0.76,
    -0.26879036, 0.962329, -0.040393304, -0.0065659247,
    0.77807784, 0.1872842, -0.23067987, -0.55344945,
    0.72863466, -0.13815632, 0.6533794, 0.15198605,
    0.32936957, -0.64008397, -0.19093603, -0.6673467,
    -0.0723397, 0.63105637, -0.7575258, 0.15063041,
    -0.10836278, 0.21249022, 0.4843759, -0.84171575,
    -0.52905995, -0.13492565, -0.54204714, 0.6388079,
    -0.37359548, -0.4664115, 0.74423, -0.29834285,
    0.8204551, 0.38877434, 0.0789525, 0.4116728,
    0.8176245, 0.19067818, -0.4693019, -0.27365628,
    0.3672599, -0.31774104, 0.5819453, 0.65230393,
    0.013738235, -0.97484374, -0.16402087, -0.15029334,
    -0.07774814, 0.3588544, -0.44029194, 0.81934226,
    -0.74603736, -0.010943701, 0.66547227, 0.021333521,
    -0.54766613, -0.15539895, -0.13648944, -0.8107303,
    0.61004645, 0.575792, -0.54415256, -0.014312329,
    0.6266915, 0.35473797, 0.18903437, -0.6675962,
    0.60533744, -0.170158, -0.5493946, 0.55025303,
    0.086161844, -0.5416087, 0.6925897, -0.46856767,
    -0.120068304, 0.90974104, 0.036795273, 0.39572835,
    -0.48666003, 0.23321825, -0.7905741, -0.28941998,
    -0.656868, -0.2123607, 0.4599178, 0.55848277,
    0.8587421, -0.4861423, -0.13760544, -0.08539525,
    0.3426033, 0.31058866, -0.6525944, 0.6002318,
    0.7854375, 0.22883505, 0.5680041, -0.08996511,
    0.095988475, -0.19696085, -0.1885659, 0.9573064,
    0.15625356, -0.733215, 0.64519083, -0.1473412,
    -0.39621904, 0.37125206, 0.020704957, -0.8394961,
    -0.69830275, 0.18222463, -0.68115246, 0.123283304,
    0.7543456, -0.257498, 0.4347438, -0.4191126,
    0.3215174, -0.94304, -0.059733078, 0.061106585,
    0.13586271, 0.26597947, -0.8503714, -0.4332028,
    0.1858411, -0.08476613, 0.45652074, 0.8659484,
    -0.22291699, -0.82438606, -0.35433576, -0.38097486,
    -0.09694833, 0.64476776, 0.7071275, 0.2735804,
    -0.94354606, 0.22234531, 0.0343225, -0.2431159,
    0.90816927, -0.115816206, -0.27526888, 0.29332963,
    0.6215617, -0.5897189, 0.50962424, -0.07858629,
    0.05738015, 0.42397645, -0.05902515, 0.9019244,
    -0.11593624, 0.11700538, -0.98502237, 0.050984755,
    -0.23964258, -0.1895462, 0.3607435, -0.8811968,
    -0.40408584, -0.85986626, -0.2866968, 0.12308357,
    -0.34955212, 0.27483734, 0.8220982, -0.35557318,
    0.96127003, -0.011023595, 0.1687729, 0.21760987,
    0.6703553, -0.36519435, -0.39559114, -0.510651,
    0.3841266, -0.793853, 0.42120486, 0.2117326,
    0.15363117, 0.6631755, 0.022759184, -0.73217326,
    -0.20173159, -0.06351655, -0.78875107, 0.5771843,
    -0.5712503, -0.6507173, 0.43162462, -0.25286406,
    -0.4997386, 0.6451016, -0.19888002, 0.5427264,
    0.76254153, 0.17833821, -0.6197258, 0.05163071,
    0.3861934, -0.25094593, 0.13985454, 0.8765395,
    0.41980058, -0.7800695, -0.45411322, 0.09508027,
    0.045090143, 0.5562239, 0.54994476, -0.62140375,
    -0.550487, 0.65907395, 0.14985046, 0.49003106,
    -0.47994053, -0.21800426, -0.6723438, -0.51969707,
    -0.59395176, -0.69458896, 0.3493825, 0.20663814,
    0.84669346, 0.43880364, 0.044006873, -0.29769945,
    0.2573804, -0.024741072, -0.86456287, 0.43089938,
    0.44644383, -0.5056327, 0.54408455, -0.49899444,
    0.12737146, -0.85671395, -0.3333802, 0.37239146,
    0.00094752444, 0.38668856, 0.91334975, -0.12752776,
    -0.37400743, 0.039017778, -0.0026135913, 0.9266009,
    -0.69056183, -0.3876492, -0.60729545, -0.06359775,
    0.51946217, 0.51010567, 0.31163764, 0.6106007,
    0.8621514, 0.4619544, -0.18849196, 0.08811295,
    0.0856273, 0.0008398539, -0.6776385, -0.7303926,
    -0.064969555, -0.86522347, 0.44411334, 0.22345161,
    -0.1359766, 0.7303231, -0.3286278, -0.5832172,
    -0.27476382, 0.22371742, 0.88550234, 0.30056766,
    -0.8930806, -0.26073796, -0.005785849, -0.36659145,
    0.76778406, -0.5265814, -0.16990462, 0.32303578,
    0.5674709, 0.5609159, 0.5808939, -0.16097362,
    0.25733855, 0.13280457, -0.090759255, 0.9528392,
    -0.08900622, -0.37466747, -0.9148592, -0.12138735,
    -0.13611047, -0.76095665, 0.118931435, 0.62311655,
    -0.7697606, 0.5701484, -0.2864234, -0.01900238,
    -0.35598814, 0.073161855, 0.59269565, 0.7187709,
    0.8486053, -0.4395, 0.23487128, 0.1776073,
    0.33061802, 0.6343792, -0.3246859, -0.6187357,
    0.39613947, 0.3486477, 0.82385945, 0.20681857,
    -0.00079194887, -0.17170522, -0.020353701, -0.9849378,
    -0.18251355, -0.58760595, -0.73275596, 0.2906488,
    -0.43150973, 0.74497133, 0.3537596, -0.36561072,
    -0.78425115, 0.30534673, -0.25518486, 0.4760191,
    0.7207874, -0.18661465, -0.62428695, -0.2364451,
    0.4050732, -0.71507776, 0.17614922, 0.5418034,
    0.30171886, 0.7604944, -0.51445466, -0.25680804,
    0.11064196, 0.16113912, 0.6788468, 0.707785,
    -0.4317276, -0.8804728, 0.09850474, -0.16933928,
    -0.2307532, -0.47273454, -0.30839455, 0.79257035,
    -0.7210623, 0.4331249, 0.51942384, 0.1505683,
    0.8136446, -0.059492927, 0.08747589, -0.57165635,
    0.309534, -0.47365597, -0.7822765, 0.26054204,
    0.2476589, 0.85877424, 0.15752654, -0.41994917,
    0.046503678, 0.5673811, -0.64424735, 0.510746,
    -0.089000784, -0.12458001, 0.9010292, -0.40583858,
    -0.5103043, -0.6971388, 0.018684024, 0.50322753,
    -0.56848663, 0.5487877, -0.5666054, -0.23369484,
    0.74429584, 0.092559345, 0.48256588, 0.45231253,
    0.92667854, -0.17682539, -0.16868685, -0.28555974,
];

pub(super) static GRADIENTS_5D: [f32; 2048] = [
    -0.032625716, -0.38601527, -0.39632377, -0.5693125, -0.6072384, 0.0, 0.0, 0.0,
    -0.3092136, -0.75495625, 0.5203467, 0.22990829, 0.10396882, 0.0, 0.0, 0.0,
    -0.45711333, 0.51577544, 0.018234259, -0.319932, -0.64987236, 0.0, 0.0, 0.0,
    -0.77862084, 0.20091897, -0.36975893, 0.40897143, 0.22226535, 0.0, 0.0, 0.0,
    0.6456044, -0.1837739, 0.5956904, -0.04377576, -0.43892908, 0.0, 0.0, 0.0,
    0.38300148, -0.53182703, 0.077763796, -0.64384335, 0.38715422, 0.0, 0.0, 0.0,
    0.3237261, 0.7968721, -0.29487446, 0.1867183, -0.3719968, 0.0, 0.0, 0.0,
    0.0112331025, 0.21624362, 0.885068, -0.21521099, 0.35135654, 0.0, 0.0, 0.0,
    -0.12240269, -0.039341334, 0.1692435, 0.92215174, -0.3232068, 0.0, 0.0, 0.0,
    -0.28077388, -0.46219352, -0.37313065, 0.039701894, 0.7528217, 0.0, 0.0, 0.0,
    -0.28998274, -0.6166734, -0.5994656, -0.3941279, -0.14466564, 0.0, 0.0, 0.0,
    -0.6191978, 0.3755867, 0.16344665, 0.23917899, 0.62578535, 0.0, 0.0, 0.0,
    0.89640707, 0.18071447, -0.21122092, -0.3074401, -0.15704438, 0.0, 0.0, 0.0,
    0.38251078, -0.19345759, -0.51911867, 0.5832318, 0.45455042, 0.0, 0.0, 0.0,
    0.45848227, -0.68563634, 0.5565594, 0.08401964, 0.053658236, 0.0, 0.0, 0.0,
    0.09881733, 0.43182075, 0.05174252, -0.41124192, -0.7949646, 0.0, 0.0, 0.0,
    -0.02830152, 0.34731567, -0.78481716, 0.5081722, 0.06628672, 0.0, 0.0, 0.0,
    -0.13381083, -0.13434942, 0.53476775, -0.25270635, -0.7837141, 0.0, 0.0, 0.0,
    -0.2742591, -0.19559792, -0.033608552, 0.924405, 0.17569649, 0.0, 0.0, 0.0,
    -0.40729037, -0.74460715, -0.28817526, 0.04901578, -0.44071215, 0.0, 0.0, 0.0,
    -0.87419546, 0.088184595, 0.276462, -0.35815367, 0.1526449, 0.0, 0.0, 0.0,
    0.7216182, 0.18680389, 0.008666174, 0.43086493, -0.5085783, 0.0, 0.0, 0.0,
    0.5357556, -0.22642608, -0.5034732, -0.30898058, 0.5592342, 0.0, 0.0, 0.0,
    0.220356, -0.37363583, 0.49576768, 0.73907465, -0.14079265, 0.0, 0.0, 0.0,
    0.05664671, 0.83398145, 0.20697168, 0.07011303, 0.5035007, 0.0, 0.0, 0.0,
    -0.08978915, 0.44452524, -0.37433305, -0.7347546, -0.33815035, 0.0, 0.0, 0.0,
    -0.12005727, -0.035123575, 0.80561686, 0.22617489, 0.53308445, 0.0, 0.0, 0.0,
    -0.7601196, -0.48677725, 0.2943079, -0.23498538, -0.20840073, 0.0, 0.0, 0.0,
    -0.45060927, -0.5460304, -0.07876499, 0.56786215, 0.41246906, 0.0, 0.0, 0.0,
    0.58512336, 0.36509782, -0.71231174, 0.12312691, -0.042260878, 0.0, 0.0, 0.0,
    0.4675845, -0.0076228506, 0.15552899, -0.40789327, 0.7685964, 0.0, 0.0, 0.0,
    0.4162832, -0.28437597, -0.21330766, 0.83645386, 0.026141811, 0.0, 0.0, 0.0,
    0.14886956, -0.5666699, -0.49163282, -0.05944376, -0.6414723, 0.0, 0.0, 0.0,
    0.0061072316, 0.53080386, 0.25031617, -0.80845827, 0.044124372, 0.0, 0.0, 0.0,
    -0.19268866, 0.32745776, -0.118053414, 0.17110692, -0.90134805, 0.0, 0.0, 0.0,
    -0.42374045, -0.07665139, -0.64385915, -0.51142555, 0.37209928, 0.0, 0.0, 0.0,
    -0.5161779, -0.3442411, 0.43552858, 0.3919156, -0.5213209, 0.0, 0.0, 0.0,
    0.74275935, -0.65341103, -0.0035863994, -0.019611137, 0.14479333, 0.0, 0.0, 0.0,
    0.4034727, 0.39439288, -0.35446873, -0.72167116, -0.18763444, 0.0, 0.0, 0.0,
    0.4270603, 0.052724693, 0.7335443, 0.24126765, 0.46748507, 0.0, 0.0, 0.0,
    0.23272726, -0.3674707, 0.12907806, -0.78542197, -0.42101598, 0.0, 0.0, 0.0,
    0.053503584, -0.61798185, -0.30736262, 0.47803095, 0.5406019, 0.0, 0.0, 0.0,
    -0.1387222, 0.6410588, 0.7432646, -0.0038761974, -0.13169068, 0.0, 0.0, 0.0,
    -0.33389342, 0.1742136, 0.022899432, -0.7248871, 0.5763499, 0.0, 0.0, 0.0,
    -0.84062093, -0.10605829, -0.45069426, 0.23963764, -0.14682145, 0.0, 0.0, 0.0,
    -0.5044314, -0.16646579, 0.69947046, -0.25504273, 0.40439135, 0.0, 0.0, 0.0,
    0.33671775, -0.8721229, 0.074590005, 0.34671986, 0.015636902, 0.0, 0.0, 0.0,
    0.41615868, 0.24141376, -0.036525358, -0.0622248, -0.8736849, 0.0, 0.0, 0.0,
    0.36073974, 0.016028523, -0.7520552, -0.5468891, 0.0702503, 0.0, 0.0, 0.0,
    0.14107245, -0.2896475, 0.25028434, 0.19714636, -0.89145607, 0.0, 0.0, 0.0,
    -0.12675133, -0.7997345, -0.09521771, -0.51509666, 0.2645144, 0.0, 0.0, 0.0,
    -0.19605307, 0.45561674, -0.6101438, 0.40209642, -0.46906245, 0.0, 0.0, 0.0,
    -0.5830988, 0.38417158, 0.57958114, -0.15084347, 0.3920968, 0.0, 0.0, 0.0,
    -0.67038774, -0.084733926, 0.007241716, -0.7065166, -0.21019574, 0.0, 0.0, 0.0,
    0.80678225, -0.3377678, -0.31790006, 0.17155938, 0.32329896, 0.0, 0.0, 0.0,
    0.43712384, 0.7932868, 0.31274027, -0.18474318, -0.21836266, 0.0, 0.0, 0.0,
    0.3667148, 0.44969955, -0.013496295, 0.63094723, 0.5147951, 0.0, 0.0, 0.0,
    0.22714543, 0.114711724, -0.906087, -0.10274069, -0.32202002, 0.0, 0.0, 0.0,
    0.017845366, -0.25943023, 0.5558765, -0.5935049, 0.5207022, 0.0, 0.0, 0.0,
    -0.2686701, -0.83980066, 0.16099729, 0.38499057, -0.22003026, 0.0, 0.0, 0.0,
    -0.37337214, 0.5155772, -0.32478458, -0.31882015, 0.6226091, 0.0, 0.0, 0.0,
    -0.4678614, 0.21402447, 0.6527809, 0.5560138, -0.0049989284, 0.0, 0.0, 0.0,
    -0.6602054, 0.04613099, -0.0013774291, -0.038539648, 0.7486745, 0.0, 0.0, 0.0,
    0.61329937, -0.3459499, -0.31536508, -0.6357144, 0.02438463, 0.0, 0.0, 0.0,
    0.3176289, 0.5926919, 0.5539804, 0.20933157, -0.4439755, 0.0, 0.0, 0.0,
    0.44245133, 0.60981715, 0.40036246, -0.46699437, 0.23234895, 0.0, 0.0, 0.0,
    0.13054322, 0.023446126, -0.3317149, 0.7051718, -0.6124595, 0.0, 0.0, 0.0,
    -0.049872648, -0.28230107, -0.9302413, 0.062675364, 0.22032204, 0.0, 0.0, 0.0,
    -0.19686754, -0.66792125, 0.24455386, -0.59662074, -0.31521657, 0.0, 0.0, 0.0,
    -0.5532863, 0.66192824, -0.16438812, 0.2901725, 0.38013384, 0.0, 0.0, 0.0,
    -0.68949807, 0.28309998, -0.60447943, -0.101857446, -0.26206192, 0.0, 0.0, 0.0,
    0.6938758, -0.11504965, 0.30496198, 0.5716266, 0.29247418, 0.0, 0.0, 0.0,
    0.7171574, -0.5823686, -0.099347316, 0.15159112, -0.33716804, 0.0, 0.0, 0.0,
    0.23616646, 0.73832923, -0.3982032, -0.38167804, 0.3079796, 0.0, 0.0, 0.0,
    0.16173206, 0.4328726, 0.7013143, 0.52106124, -0.1520447, 0.0, 0.0, 0.0,
    -0.055036653, -0.094780505, -0.0982389, -0.35987434, 0.9213182, 0.0, 0.0, 0.0,
    -0.107611015, -0.22533585, -0.48213863, 0.8210635, -0.17618345, 0.0, 0.0, 0.0,
    -0.20618978, -0.57832515, 0.5016434, 0.008959673, 0.6093434, 0.0, 0.0, 0.0,
    -0.55721945, 0.56634736, 0.0726479, -0.6001747, 0.057181295, 0.0, 0.0, 0.0,
    -0.7879387, 0.11673248, -0.14001234, 0.2754111, -0.5196839, 0.0, 0.0, 0.0,
    0.61899817, -0.17965497, 0.7329009, -0.20520656, 0.07288288, 0.0, 0.0, 0.0,
    0.35518724, -0.32376534, 0.018083261, 0.7071425, -0.5183055, 0.0, 0.0, 0.0,
    0.20960683, 0.91324747, -0.32036102, 0.04602039, 0.13151027, 0.0, 0.0, 0.0,
    0.027751224, 0.15746516, 0.8384651, -0.36807472, -0.36868945, 0.0, 0.0, 0.0,
    -0.14338145, 0.01095845, 0.43055978, 0.7474845, 0.48498136, 0.0, 0.0, 0.0,
    -0.5112141, -0.43242857, -0.24478781, -0.2339952, -0.6610528, 0.0, 0.0, 0.0,
    -0.2558176, -0.4376179, -0.5907037, 0.5959345, 0.19743119, 0.0, 0.0, 0.0,
    -0.7664457, 0.45463926, 0.34006968, 0.15033713, -0.26002973, 0.0, 0.0, 0.0,
    0.70980763, 0.16945113, -0.1653492, -0.51342994, 0.42012942, 0.0, 0.0, 0.0,
    0.41689163, -0.19225904, -0.6950705, 0.47066918, -0.29083553, 0.0, 0.0, 0.0,
    0.30419886, -0.5552064, 0.43138674, -0.19465563, 0.6125549, 0.0, 0.0, 0.0,
    0.06910121, 0.5902239, 0.047452215, 0.79663825, -0.09988259, 0.0, 0.0, 0.0,
    -0.02582695, 0.22631687, -0.5512358, -0.020376364, 0.80239487, 0.0, 0.0, 0.0,
    -0.2605681, -0.0916522, 0.70967335, -0.64239573, -0.08599784, 0.0, 0.0, 0.0,
    -0.25883412, -0.13875522, -0.00575372, 0.28958225, 0.910967, 0.0, 0.0, 0.0,
    -0.5811358, -0.74866474, -0.27741265, -0.13926204, 0.07369257, 0.0, 0.0, 0.0,
    0.48106098, 0.27778023, 0.3618469, -0.53515124, -0.5235441, 0.0, 0.0, 0.0,
    0.904282, 0.27467954, 0.13532287, 0.19153665, 0.22765471, 0.0, 0.0, 0.0,
    0.47506398, -0.16242729, -0.40718016, -0.49496236, -0.5806446, 0.0, 0.0, 0.0,
    0.23258474, -0.48587647, 0.68309516, 0.40827093, 0.27663022, 0.0, 0.0, 0.0,
    -0.031895384, 0.8701988, 0.1827629, -0.106704995, -0.4437888, 0.0, 0.0, 0.0,
    -0.1316385, 0.3062624, -0.28806612, -0.84871733, 0.29252607, 0.0, 0.0, 0.0,
    -0.1876343, -0.011968853, 0.93161786, 0.144528, -0.27540874, 0.0, 0.0, 0.0,
    -0.6072858, -0.35732195, 0.2195372, -0.5360073, 0.40990797, 0.0, 0.0, 0.0,
    -0.6137761, -0.6246527, -0.15595274, 0.42518333, -0.16728969, 0.0, 0.0, 0.0,
    0.4924741, 0.43495724, -0.61860394, -0.07087187, 0.42495623, 0.0, 0.0, 0.0,
    0.38096133, 0.1526269, 0.3006888, -0.8602239, -0.034272842, 0.0, 0.0, 0.0,
    0.3371686, -0.25799823, -0.20830266, 0.13104457, 0.871316, 0.0, 0.0, 0.0,
    0.21030518, -0.5644644, -0.6537155, -0.44723973, -0.09891594, 0.0, 0.0, 0.0,
    -0.038897797, 0.47188595, 0.28698224, 0.37531587, 0.74336386, 0.0, 0.0, 0.0,
    -0.7323381, 0.5978304, -0.26124638, -0.1916393, 0.036117177, 0.0, 0.0, 0.0,
    -0.32390174, 0.019157264, -0.4255007, -0.5573354, -0.6348599, 0.0, 0.0, 0.0,
    -0.7555374, -0.31190076, 0.54642737, 0.16261669, 0.082789406, 0.0, 0.0, 0.0,
    0.58427846, -0.5892372, -0.00026081732, -0.31351545, -0.4616559, 0.0, 0.0, 0.0,
    0.51386106, 0.50716764, -0.43402177, 0.5080168, 0.17964336, 0.0, 0.0, 0.0,
    0.38633487, 0.15267551, 0.67740566, -0.012112877, -0.6069682, 0.0, 0.0, 0.0,
    0.16682012, -0.19858727, 0.035481047, -0.87700486, 0.4029115, 0.0, 0.0, 0.0,
    0.060511924, -0.6713894, -0.34897685, 0.38006708, -0.52852505, 0.0, 0.0, 0.0,
    -0.1463198, 0.6429264, 0.6127852, -0.29902765, 0.31672212, 0.0, 0.0, 0.0,
    -0.42761034, 0.31647068, 0.16615783, 0.7431436, -0.37030375, 0.0, 0.0, 0.0,
    -0.7220443, 0.0015277725, -0.43729147, -0.013020448, 0.535963, 0.0, 0.0, 0.0,
    -0.57113874, -0.1763062, -0.75736636, -0.24151917, -0.103832945, 0.0, 0.0, 0.0,
    0.41088054, -0.7335591, 0.14109027, 0.19925337, 0.48317686, 0.0, 0.0, 0.0,
    0.5700161, 0.7028983, -0.18695144, -0.35713053, -0.13609745, 0.0, 0.0, 0.0,
    0.14265856, 0.10756892, -0.59979796, 0.4639862, 0.62692636, 0.0, 0.0, 0.0,
    0.095431976, -0.6086413, 0.7739874, -0.05160382, -0.13685392, 0.0, 0.0, 0.0,
    -0.013892838, -0.45583832, 0.03262086, -0.29084933, -0.84045285, 0.0, 0.0, 0.0,
    -0.25341082, 0.68496925, -0.6696547, 0.12339157, 0.054194964, 0.0, 0.0, 0.0,
    -0.4661156, 0.21450582, 0.44356862, -0.24119778, -0.69411385, 0.0, 0.0, 0.0,
    -0.7650513, -0.01743234, -0.019673318, 0.6342873, 0.10809795, 0.0, 0.0, 0.0,
    0.752761, -0.23872752, -0.45950615, 0.01263173, -0.406269, 0.0, 0.0, 0.0,
    0.21363598, -0.8060847, 0.37229615, -0.37918496, 0.14900178, 0.0, 0.0, 0.0,
    0.38647693, 0.56077087, 0.12725829, 0.43890777, -0.5721336, 0.0, 0.0, 0.0,
    0.17874198, 0.11511299, -0.66007, -0.4122145, 0.59092057, 0.0, 0.0, 0.0,
    0.012633087, -0.12542161, 0.6865391, 0.62467295, -0.35008234, 0.0, 0.0, 0.0,
    -0.21525963, -0.84086037, 0.080139324, 0.011906158, 0.48995215, 0.0, 0.0, 0.0,
    -0.29832792, 0.7508479, -0.30006182, -0.47350228, -0.18162158, 0.0, 0.0, 0.0,
    -0.48987985, 0.20998274, 0.6557402, 0.30781597, 0.43724036, 0.0, 0.0, 0.0,
    0.9559451, -0.10709972, 0.18833447, -0.11879632, -0.15848091, 0.0, 0.0, 0.0,
    0.49600762, -0.34053236, -0.053304847, 0.60987383, 0.5130562, 0.0, 0.0, 0.0,
    0.23631555, -0.62449557, -0.73001975, 0.09287653, -0.11227366, 0.0, 0.0, 0.0,
    0.15581527, 0.3648795, 0.24616335, -0.41209733, 0.7824091, 0.0, 0.0, 0.0,
    0.12907803, 0.17584887, -0.39480028, 0.89168286, 0.038084287, 0.0, 0.0, 0.0,
    -0.0656143, -0.1645432, -0.6568497, -0.055570714, -0.7308082, 0.0, 0.0, 0.0,
    -0.19239302, -0.56177455, 0.34136358, 0.71600777, 0.13490033, 0.0, 0.0, 0.0,
    -0.46037164, 0.6607425, -0.15524447, 0.1264757, -0.55801463, 0.0, 0.0, 0.0,
    -0.76392186, 0.19255595, -0.42658862, -0.39297876, 0.20720871, 0.0, 0.0, 0.0,
    0.67717505, -0.05994263, 0.41804314, 0.4048531, -0.44629, 0.0, 0.0, 0.0,
    0.6029615, -0.5082577, -0.07520889, -0.25245765, 0.55562603, 0.0, 0.0, 0.0,
    0.1756523, 0.7247776, -0.30471286, 0.56357235, -0.18270205, 0.0, 0.0, 0.0,
    0.10970731, 0.53640974, 0.6752423, 0.18487793, 0.45836326, 0.0, 0.0, 0.0,
    -0.07790255, 0.13986251, 0.13857701, -0.8648106, -0.45526782, 0.0, 0.0, 0.0,
    -0.3473444, -0.1714487, -0.5075794, 0.46814257, 0.6108706, 0.0, 0.0, 0.0,
    -0.39152893, -0.5844876, 0.65122503, -0.14317541, -0.24593906, 0.0, 0.0, 0.0,
    -0.3589787, 0.26143906, 0.059506524, 0.7647015, 0.4631139, 0.0, 0.0, 0.0,
    0.895919, 0.25610027, -0.27211177, 0.19123782, -0.14534456, 0.0, 0.0, 0.0,
    0.4450226, -0.016741585, 0.63027513, -0.29431546, 0.56374305, 0.0, 0.0, 0.0,
    0.53056705, -0.51336545, 0.24257724, 0.62854266, 0.032324314, 0.0, 0.0, 0.0,
    0.109232634, 0.7068475, -0.23355119, -0.11240929, -0.6490399, 0.0, 0.0, 0.0,
    -0.066891745, 0.2683665, -0.6780363, -0.6799125, 0.038609575, 0.0, 0.0, 0.0,
    -0.16155407, 0.1428463, 0.3719876, 0.23403674, -0.87197894, 0.0, 0.0, 0.0,
    -0.45460245, -0.34654027, -0.21132089, -0.75058234, 0.2553744, 0.0, 0.0, 0.0,
    -0.3286497, -0.47596797, -0.6278988, 0.4019661, -0.3310743, 0.0, 0.0, 0.0,
    -0.8280586, 0.48517954, 0.183513, -0.0382455, 0.20923674, 0.0, 0.0, 0.0,
    0.5818661, 0.08092931, -0.047125842, -0.73769844, -0.32933643, 0.0, 0.0, 0.0,
    0.42472377, -0.09387107, -0.80538017, 0.1030463, 0.38928425, 0.0, 0.0, 0.0,
    0.24644248, -0.50230587, 0.5628151, -0.4441107, -0.41588423, 0.0, 0.0, 0.0,
    0.067596935, 0.8185272, -0.027846556, 0.46202278, 0.3334717, 0.0, 0.0, 0.0,
    -0.091957845, 0.58009344, -0.7327147, -0.15489966, -0.3068722, 0.0, 0.0, 0.0,
    -0.24726422, 0.11328839, 0.48666707, -0.714327, 0.42298737, 0.0, 0.0, 0.0,
    -0.8359232, -0.33763957, 0.13724202, 0.26890883, -0.3099752, 0.0, 0.0, 0.0,
    -0.47665086, -0.48794195, -0.30776852, -0.35192332, 0.56226784, 0.0, 0.0, 0.0,
    0.64582324, 0.4403621, 0.4790759, 0.38822883, -0.09358524, 0.0, 0.0, 0.0,
    0.4695759, 0.22922912, 0.07896698, 0.06341747, 0.84657836, 0.0, 0.0, 0.0,
    0.2354421, -0.14736985, -0.33246097, -0.9010476, 0.02078564, 0.0, 0.0, 0.0,
    0.06365598, -0.35679153, 0.7003614, 0.13686872, -0.599507, 0.0, 0.0, 0.0,
    -0.01828445, 0.91860616, 0.15035892, -0.35797825, 0.07121947, 0.0, 0.0, 0.0,
    -0.21474788, 0.35421762, -0.196399, 0.620497, -0.63625795, 0.0, 0.0, 0.0,
    -0.3255746, 0.12946002, -0.92002434, 0.0023835204, 0.17547308, 0.0, 0.0, 0.0,
    -0.47125322, -0.26323307, 0.36593148, -0.65036577, -0.38954756, 0.0, 0.0, 0.0,
    -0.8656966, -0.43384802, -0.10144031, 0.13478124, 0.18409005, 0.0, 0.0, 0.0,
    0.504346, 0.47011888, -0.6039115, -0.2573759, -0.3060586, 0.0, 0.0, 0.0,
    0.34844542, 0.1991496, 0.4388233, 0.68393433, 0.42260286, 0.0, 0.0, 0.0,
    0.5036178, -0.28175306, -0.13245137, 0.0755408, -0.8023307, 0.0, 0.0, 0.0,
    0.030174138, -0.3922615, -0.46338758, -0.6085922, 0.51000774, 0.0, 0.0, 0.0,
    -0.10610588, 0.84933573, 0.3807233, 0.3252683, -0.12892126, 0.0, 0.0, 0.0,
    -0.38654727, 0.33812508, 0.08356813, -0.31357706, 0.79431635, 0.0, 0.0, 0.0,
    -0.49411035, 0.06684925, -0.5490672, 0.6567846, -0.13618146, 0.0, 0.0, 0.0,
    -0.5454642, -0.16821265, 0.43247956, 0.07726239, 0.6936608, 0.0, 0.0, 0.0,
    0.625794, -0.5733238, 0.105560735, -0.51627946, -0.044656932, 0.0, 0.0, 0.0,
    0.39211413, 0.35588595, -0.36518335, 0.29846284, -0.7050906, 0.0, 0.0, 0.0,
    0.4114618, 0.3068374, 0.80142576, -0.30187145, 0.056039248, 0.0, 0.0, 0.0,
    0.054284006, -0.053657845, 0.15773027, 0.6223106, -0.76290554, 0.0, 0.0, 0.0,
    -0.11464311, -0.83635944, -0.44410956, 0.0063286917, 0.3001441, 0.0, 0.0, 0.0,
    -0.12856185, 0.5846673, 0.51501757, -0.5138818, -0.33513933, 0.0, 0.0, 0.0,
    -0.49898988, 0.5538769, 0.3541022, 0.50664914, 0.24929447, 0.0, 0.0, 0.0,
    -0.8350837, -0.060296092, -0.21758312, -0.23088226, -0.44536555, 0.0, 0.0, 0.0,
    0.68251157, -0.080995604, -0.5628358, 0.4453547, 0.111771025, 0.0, 0.0, 0.0,
    0.45990336, -0.73826385, 0.31079212, 0.019499287, -0.3827316, 0.0, 0.0, 0.0,
    0.37821442, 0.4786039, -0.12125336, -0.63259923, 0.46152788, 0.0, 0.0, 0.0,
    0.13255996, 0.1249094, -0.8599962, 0.39180863, -0.2715106, 0.0, 0.0, 0.0,
    -0.025432117, -0.15800832, 0.4404991, -0.22335573, 0.85466915, 0.0, 0.0, 0.0,
    -0.09671161, -0.5645846, -0.090485565, 0.78634316, -0.21299733, 0.0, 0.0, 0.0,
    -0.19759183, 0.6704998, -0.419715, 0.116634496, 0.5671183, 0.0, 0.0, 0.0,
    -0.51908886, 0.30646735, 0.46800274, -0.6422855, -0.071184576, 0.0, 0.0, 0.0,
    -0.46612802, -0.14113468, -0.006599909, 0.2021387, -0.8496482, 0.0, 0.0, 0.0,
    0.74107665, -0.2997527, -0.5588709, -0.21983455, 0.017022382, 0.0, 0.0, 0.0,
    0.20299286, -0.6100318, 0.3399538, 0.43749472, -0.5288524, 0.0, 0.0, 0.0,
    0.5469164, 0.7972422, 0.09463175, 0.13986069, 0.19175787, 0.0, 0.0, 0.0,
    0.1711731, 0.24083939, -0.4363885, -0.51844156, -0.673409, 0.0, 0.0, 0.0,
    -0.07087849, -0.15704364, 0.8213862, 0.52022237, 0.15813562, 0.0, 0.0, 0.0,
    -0.29299307, -0.70634365, 0.22607619, -0.109190166, -0.59346503, 0.0, 0.0, 0.0,
    -0.2358536, 0.46946818, -0.28012365, 0.7617573, 0.25540027, 0.0, 0.0, 0.0,
    -0.5877111, 0.1747596, 0.6838438, 0.12552376, -0.37504166, 0.0, 0.0, 0.0,
    0.8259763, -0.038728453, 0.25814718, -0.38075703, 0.32349244, 0.0, 0.0, 0.0,
    0.66011554, -0.3500034, -0.2612322, 0.5233927, -0.31553596, 0.0, 0.0, 0.0,
    0.22816204, -0.5793535, -0.63135564, -0.12061779, 0.4462432, 0.0, 0.0, 0.0,
    0.22776158, 0.2544667, 0.30226424, 0.8860072, -0.08365959, 0.0, 0.0, 0.0,
    0.010854017, 0.24346055, -0.13331564, 0.17722793, 0.9441538, 0.0, 0.0, 0.0,
    -0.110283606, -0.17158933, -0.83750147, -0.4949494, -0.10959489, 0.0, 0.0, 0.0,
    -0.18418753, -0.42705327, 0.2880731, 0.46099666, 0.69871056, 0.0, 0.0, 0.0,
    -0.4158126, 0.9088446, -0.0021029082, -0.032919485, -0.0036403786, 0.0, 0.0, 0.0,
    -0.56227523, 0.23818958, -0.30690733, -0.66219026, -0.30728528, 0.0, 0.0, 0.0,
    0.80948734, -0.08007405, 0.5391629, 0.19334894, 0.10118264, 0.0, 0.0, 0.0,
    0.44736004, -0.23511072, 0.12820981, -0.40126067, -0.75308967, 0.0, 0.0, 0.0,
    0.20970099, -0.79830945, -0.38848466, 0.39930832, 0.09143343, 0.0, 0.0, 0.0,
    0.04618759, 0.48021948, 0.5485722, -0.1263812, -0.671083, 0.0, 0.0, 0.0,
    -0.15874588, 0.011806804, 0.07944, -0.97843033, 0.10499367, 0.0, 0.0, 0.0,
    -0.381386, -0.16488777, -0.51622564, 0.3272969, -0.6736056, 0.0, 0.0, 0.0,
    -0.33676288, -0.5995828, 0.57141566, -0.385391, 0.2281429, 0.0, 0.0, 0.0,
    -0.6040009, 0.6038952, 0.073237285, 0.457886, -0.23552099, 0.0, 0.0, 0.0,
    0.78922737, 0.27035177, -0.23775841, -0.0047274115, 0.49747226, 0.0, 0.0, 0.0,
    0.3560562, -0.062652566, 0.67284673, -0.62653446, -0.15501747, 0.0, 0.0, 0.0,
    0.36479193, -0.334597, 0.30861577, 0.2710098, 0.7656903, 0.0, 0.0, 0.0,
    0.14134715, -0.89088583, -0.19524218, -0.3611237, -0.13346735, 0.0, 0.0, 0.0,
    -0.14924145, 0.34092754, -0.73273474, 0.3152436, 0.47456998, 0.0, 0.0, 0.0,
    -0.50638545, 0.17908514, 0.8120755, -0.22178337, -0.05336527, 0.0, 0.0, 0.0,
    -0.2605314, -0.056667175, 0.06965859, -0.5210891, -0.8077909, 0.0, 0.0, 0.0,
    -0.531666, -0.45880657, -0.6824531, 0.1602457, 0.124124736, 0.0, 0.0, 0.0,
    -0.82634103, 0.24874674, 0.20779467, -0.2415458, -0.39212567, 0.0, 0.0, 0.0,
    0.6942959, 0.2542678, -0.049964506, 0.6676248, 0.0712872, 0.0, 0.0, 0.0,
    0.42493296, -0.014873474, -0.6118448, 0.021913368, -0.6666157, 0.0, 0.0, 0.0,
    0.14291574, -0.4101221, 0.47401205, -0.75918514, 0.10161426, 0.0, 0.0, 0.0,
    0.0020217723, -0.97610945, 0.011253695, 0.032314006, -0.21455868, 0.0, 0.0, 0.0,
    -0.16834255, 0.5073015, -0.6706234, -0.3801572, 0.3464833, 0.0, 0.0, 0.0,
    -0.29988056, 0.1789178, 0.5762333, 0.5601987, -0.4818637, 0.0, 0.0, 0.0,
    -0.7365572, -0.40595666, 0.071715124, -0.049964838, 0.53389436, 0.0, 0.0, 0.0,
    -0.6171788, -0.5004994, -0.21490759, -0.54396385, -0.16281506, 0.0, 0.0, 0.0,
    0.59351635, 0.4911007, 0.4655737, 0.1155657, 0.42005253, 0.0, 0.0, 0.0,
    0.7850019, 0.4032195, 0.26388165, -0.34003067, -0.18955658, 0.0, 0.0, 0.0,
    0.14203373, 0.0068533053, -0.110330656, 0.6807722, 0.7100393, 0.0, 0.0, 0.0,
    0.08602319, -0.20646782, 0.9730639, -0.04608109, 0.03153223, 0.0, 0.0, 0.0,
    -0.04133571, 0.7200033, 0.10879925, -0.38421378, 0.56606454, 0.0, 0.0, 0.0,
    -0.42448854, 0.67726827, -0.3644496, 0.47211426, -0.073497005, 0.0, 0.0, 0.0,
    -0.32793185, 0.181468, -0.7191126, -0.11116057, -0.5745002, 0.0, 0.0, 0.0,
    -0.6227073, -0.24306822, 0.37476712, 0.6365182, 0.08687728, 0.0, 0.0, 0.0,
];

pub(super) static GRADIENTS_6D: [f32; 2048] = [
    -0.15369357, -0.20088725, -0.2616443, -0.3012422, -0.58765864, -0.6568678, 0.0, 0.0,
    -0.28276932, -0.5076382, 0.7059528, 0.37561953, 0.15024388, 0.017671924, 0.0, 0.0,
    -0.39228016, 0.60630757, 0.12414267, -0.04327534, -0.25517106, -0.6293735, 0.0, 0.0,
    -0.6068402, 0.31842664, -0.1234425, -0.5428017, 0.45896414, 0.09914477, 0.0, 0.0,
    0.7870957, 0.02792736, -0.39564332, 0.21057871, -0.08035186, -0.41517094, 0.0, 0.0,
    0.36492613, -0.18619654, 0.40839955, -0.09059094, -0.799185, 0.13589033, 0.0, 0.0,
    0.3831563, -0.44170728, 0.09678986, -0.70809186, 0.06643666, -0.37803403, 0.0, 0.0,
    0.21643041, 0.7522999, -0.2624438, 0.2831442, -0.40746745, 0.26856208, 0.0, 0.0,
    -0.033801675, 0.2619131, -0.82407635, -0.26007593, 0.31369627, -0.2917402, 0.0, 0.0,
    0.021762121, 0.10389208, 0.28003815, -0.8928268, -0.18283303, 0.28238952, 0.0, 0.0,
    -0.1351334, -0.15486857, 0.07342051, 0.20793417, 0.9110771, -0.28118685, 0.0, 0.0,
    -0.33365285, -0.5397882, -0.50326437, -0.21860887, 0.050883092, 0.54189533, 0.0, 0.0,
    -0.23293066, 0.63985664, 0.4033279, 0.5586933, -0.24409501, -0.043963134, 0.0, 0.0,
    -0.64076185, 0.39195594, 0.19464558, 0.19262518, 0.28085452, 0.5309653, 0.0, 0.0,
    0.89645165, 0.15864259, -0.1140585, -0.30919686, -0.21284577, -0.13149744, 0.0, 0.0,
    0.3397366, -0.02270749, -0.45620632, 0.5116757, 0.4091576, 0.4967064, 0.0, 0.0,
    0.51358294, -0.54798025, 0.6474798, 0.12505287, -0.017222442, -0.028023519, 0.0, 0.0,
    0.13177201, -0.58526415, 0.034359537, -0.23063096, -0.4755931, 0.5996182, 0.0, 0.0,
    0.0041664257, 0.54357237, -0.36297596, 0.7329333, 0.18852189, 0.0053384337, 0.0, 0.0,
    0.0019128899, 0.13320099, -0.72323155, 0.02013879, -0.31360647, -0.6003627, 0.0, 0.0,
    -0.26135403, -0.07240984, 0.44398737, -0.52913976, 0.6628088, 0.10010875, 0.0, 0.0,
    -0.33689955, -0.2847411, -0.08282951, 0.56401795, -0.17565419, -0.6705146, 0.0, 0.0,
    -0.3464455, -0.5899553, -0.32337844, -0.011596852, 0.64132243, 0.126197, 0.0, 0.0,
    -0.5466664, 0.41459218, 0.504305, -0.35787266, 0.06377876, -0.3778956, 0.0, 0.0,
    0.75252324, 0.21465316, 0.1566932, 0.36220217, -0.45000532, 0.17141992, 0.0, 0.0,
    0.65060705, -0.0027380548, -0.22041404, -0.08015776, 0.50833005, -0.5131237, 0.0, 0.0,
    0.2830932, -0.24039645, -0.65520966, -0.56232715, -0.2054652, 0.2726542, 0.0, 0.0,
    0.2835411, -0.50471574, 0.39800993, 0.34726614, 0.5565671, -0.27585125, 0.0, 0.0,
    0.0019759305, 0.8568909, 0.02302157, -0.18681444, 0.013851833, 0.47970054, 0.0, 0.0,
    -0.09726308, 0.21225835, -0.30017862, -0.63186985, -0.6447412, -0.20106813, 0.0, 0.0,
    -0.15002528, 0.04712098, 0.91654545, 0.17911911, 0.15636854, 0.28050253, 0.0, 0.0,
    -0.509647, -0.43387315, 0.362501, -0.33474678, -0.3595487, -0.42341042, 0.0, 0.0,
    -0.32251164, -0.38439107, -0.059885677, -0.7114255, 0.32232603, 0.36691028, 0.0, 0.0,
    -0.5995429, 0.65431356, -0.40301389, 0.19212954, 0.004200943, -0.11432619, 0.0, 0.0,
    0.39706656, 0.22561648, 0.40524793, -0.12906064, -0.6123244, 0.48539844, 0.0, 0.0,
    0.37852243, -0.028685048, 0.09537904, 0.91741294, 0.07179205, 0.00038112793, 0.0, 0.0,
    0.3017773, -0.16932812, -0.12640007, 0.1431028, -0.20072088, 0.89638954, 0.0, 0.0,
    0.1176374, -0.43816432, -0.71884763, -0.3443935, 0.3955273, 0.048814397, 0.0, 0.0,
    0.07999795, 0.6427064, 0.28819352, 0.4473944, 0.0055402373, -0.5452347, 0.0, 0.0,
    -0.031134278, 0.49304914, 0.09062806, 0.12728636, 0.8506471, 0.088980034, 0.0, 0.0,
    -0.22000706, 0.10548366, -0.45098746, -0.35329974, 0.09402767, -0.77680016, 0.0, 0.0,
    -0.31478456, -0.09869654, 0.7302492, 0.42443708, -0.40916288, 0.10170879, 0.0, 0.0,
    -0.6406666, -0.34968677, 0.31263354, 0.066459864, 0.28710687, -0.53167516, 0.0, 0.0,
    -0.6242311, -0.6733951, -0.059190776, -0.31941202, -0.20662132, 0.09303017, 0.0, 0.0,
    0.5715993, 0.33707798, -0.2975134, 0.3651077, 0.46777058, -0.3450008, 0.0, 0.0,
    0.5710266, 0.16712904, 0.69981253, -0.052592296, -0.02242402, 0.39113957, 0.0, 0.0,
    0.23476276, -0.104858376, 0.12734705, -0.48688784, -0.76222914, -0.31562772, 0.0, 0.0,
    0.18324164, -0.46666998, -0.25953257, 0.6241728, 0.19188434, 0.5048497, 0.0, 0.0,
    -0.054407883, -0.64512676, -0.63000685, -0.06657872, -0.37838584, -0.19061494, 0.0, 0.0,
    -0.16251151, 0.5539016, 0.3072825, -0.5399961, 0.34145647, 0.40518168, 0.0, 0.0,
    -0.39014542, 0.3719092, -0.03067446, 0.72157633, -0.27860305, -0.33201972, 0.0, 0.0,
    -0.27291772, 0.009688794, -0.3499232, -0.10969534, 0.75261503, 0.47382838, 0.0, 0.0,
    -0.49793148, -0.19521144, 0.6402749, -0.5457007, 0.046225917, -0.06386474, 0.0, 0.0,
    -0.5958159, -0.3657403, 0.16737753, 0.26974508, -0.27500844, 0.5786451, 0.0, 0.0,
    0.654232, 0.64107925, -0.05761973, -0.2168238, 0.31631958, -0.10299116, 0.0, 0.0,
    0.19113685, 0.17286812, -0.26801658, -0.5536888, -0.13894214, 0.73203427, 0.0, 0.0,
    0.3669617, 0.0008691913, 0.5996455, 0.19114941, 0.6846585, 0.021638805, 0.0, 0.0,
    0.16924122, -0.21749504, -0.022425247, -0.23042458, 0.15411659, -0.92016464, 0.0, 0.0,
    -0.01930195, -0.4029594, -0.20184822, 0.7115702, -0.5351624, 0.06146203, 0.0, 0.0,
    -0.17908604, 0.603511, -0.5969739, 0.11691962, 0.10710947, -0.47136208, 0.0, 0.0,
    -0.2938022, 0.49995986, 0.51762974, -0.40337035, -0.3828401, 0.29411852, 0.0, 0.0,
    -0.42027152, 0.11825551, 0.021241162, 0.7246834, 0.37646717, -0.37688562, 0.0, 0.0,
    -0.7477411, -0.17003003, -0.5197079, 0.18359332, -0.17312978, 0.27963594, 0.0, 0.0,
    -0.6016443, -0.2924307, 0.22021943, -0.108182944, -0.6965708, -0.08424594, 0.0, 0.0,
    0.40970483, 0.78739876, 0.1586873, 0.38538736, 0.08706059, 0.1756715, 0.0, 0.0,
    0.57266986, 0.50108916, -0.22892039, 0.056045376, -0.45187244, -0.40152776, 0.0, 0.0,
    0.21686836, 0.15492561, -0.6102258, -0.4728567, 0.39632994, 0.4194279, 0.0, 0.0,
    0.13020162, -0.14735039, 0.6335322, 0.6365746, -0.20723563, -0.33436275, 0.0, 0.0,
    0.049801204, -0.3971792, 0.12486336, 0.026811086, 0.7531378, 0.5062038, 0.0, 0.0,
    -0.14156367, -0.8365566, -0.19490874, -0.45465186, -0.0325638, -0.18540387, 0.0, 0.0,
    -0.24714486, 0.31454194, -0.62402487, 0.27743053, -0.47974908, 0.37874645, 0.0, 0.0,
    -0.61318666, 0.2568505, 0.5414451, -0.036547203, 0.5010496, -0.111717485, 0.0, 0.0,
    -0.53385675, 0.012683958, -0.049378943, -0.4219665, -0.21965396, 0.69720453, 0.0, 0.0,
    -0.90224993, -0.18221204, -0.21075709, 0.2056984, 0.2557952, 0.024130983, 0.0, 0.0,
    0.36018056, -0.47986817, 0.43197903, 0.02703078, 0.011941355, -0.67269415, 0.0, 0.0,
    0.29785493, 0.44299564, 0.15044199, -0.5478955, -0.6237378, 0.056268793, 0.0, 0.0,
    0.2658296, 0.26533553, -0.18034245, 0.39165652, 0.23574054, -0.7857734, 0.0, 0.0,
    0.091093056, 0.024640542, -0.82261026, -0.21067743, -0.5041536, 0.12590227, 0.0, 0.0,
    -0.05055149, -0.15948994, 0.33284855, -0.72999364, 0.31753802, -0.47696775, 0.0, 0.0,
    -0.17502017, -0.8714908, 0.1156404, 0.29694992, -0.28042817, 0.17227829, 0.0, 0.0,
    -0.15191844, 0.5312615, -0.24470504, -0.18148713, 0.69531375, -0.34409687, 0.0, 0.0,
    -0.21198411, 0.15649137, -0.76556855, 0.56071854, 0.089135595, 0.14875354, 0.0, 0.0,
    -0.70242286, 0.02661344, 0.25837386, 0.23955747, -0.45412, -0.41895586, 0.0, 0.0,
    0.85187477, -0.24449405, 0.051468283, -0.28511333, 0.23366113, 0.27567357, 0.0, 0.0,
    0.47501096, -0.39142755, -0.37208518, 0.6395902, -0.17822394, -0.2046026, 0.0, 0.0,
    0.27871475, 0.61724234, 0.5182252, 0.08494181, 0.44153267, 0.26571873, 0.0, 0.0,
    0.45076922, 0.5751251, 0.24065626, -0.5156229, 0.05054881, -0.37376547, 0.0, 0.0,
    -0.002022884, 0.07657686, -0.18569787, 0.53669053, -0.69176453, 0.43940112, 0.0, 0.0,
    -0.14953248, -0.23140265, -0.9093749, 0.058570154, 0.2507091, -0.17562649, 0.0, 0.0,
    -0.10556431, -0.42320636, 0.47028348, -0.3621649, -0.26081458, 0.6240179, 0.0, 0.0,
    -0.22650726, 0.8028649, 0.12664658, 0.3797183, 0.37254786, -0.07131001, 0.0, 0.0,
    -0.40405545, 0.3722823, -0.27047074, -0.014047809, -0.08264535, 0.7861063, 0.0, 0.0,
    -0.36279744, 0.12388424, 0.5578118, -0.26898208, -0.68521917, 0.00001224638, 0.0, 0.0,
    0.63669, -0.038283885, 0.19916807, 0.34069282, 0.098305814, -0.65403104, 0.0, 0.0,
    0.6678962, -0.49302542, -0.1294276, -0.09905921, -0.51872426, 0.123294264, 0.0, 0.0,
    0.2435545, -0.54724324, -0.29444003, -0.4143102, 0.29688492, -0.5428789, 0.0, 0.0,
    0.22313005, 0.5041429, 0.70651126, 0.37043816, -0.21189868, 0.12152912, 0.0, 0.0,
    0.15334576, 0.19447576, 0.18461402, -0.07946069, 0.73806477, -0.59458244, 0.0, 0.0,
    -0.07313873, -0.056645583, -0.32273078, -0.92545575, 0.013937624, 0.17499803, 0.0, 0.0,
    -0.23224917, -0.26804918, -0.52853566, 0.27135018, -0.60102403, -0.39999896, 0.0, 0.0,
    -0.32951552, -0.75526935, 0.43209615, -0.14194123, 0.24055307, 0.23720786, 0.0, 0.0,
    -0.37994283, 0.38205016, 0.03607925, -0.75290114, -0.20973606, -0.31229812, 0.0, 0.0,
    -0.67507315, 0.21264909, -0.27989033, 0.30680785, 0.4751461, 0.31752658, 0.0, 0.0,
    0.6807969, 0.006718075, 0.68758637, -0.17921773, 0.010702296, -0.17737508, 0.0, 0.0,
    0.2999822, -0.20814003, 0.20704477, 0.6668606, -0.5490311, 0.27871615, 0.0, 0.0,
    0.45241648, -0.77967083, -0.11672382, 0.18753615, 0.26312226, -0.26344857, 0.0, 0.0,
    0.0929951, 0.59288526, -0.45404506, -0.32011512, -0.38768455, 0.4253341, 0.0, 0.0,
    -0.07419716, 0.27360013, 0.59010446, 0.65577453, 0.34539372, -0.1485848, 0.0, 0.0,
    -0.109568484, 0.0415586, 0.23454933, 0.19673494, -0.1857602, 0.92630595, 0.0, 0.0,
    -0.10922797, -0.1979253, -0.21536103, -0.39990732, 0.8520451, -0.12887101, 0.0, 0.0,
    -0.30055004, -0.42957944, -0.41726896, 0.47453266, -0.0052479734, 0.5707968, 0.0, 0.0,
    -0.4732181, 0.67573214, 0.32332018, 0.026063206, -0.4587795, -0.061292697, 0.0, 0.0,
    -0.5847049, 0.19544485, 0.041322004, -0.24654932, 0.21143943, -0.71604526, 0.0, 0.0,
    0.71226823, 0.07962112, -0.40012628, 0.50316787, -0.26219115, 0.06566063, 0.0, 0.0,
    0.33721936, -0.04121449, 0.6381413, -0.007918745, 0.4547701, -0.5200785, 0.0, 0.0,
    0.47153547, -0.55046326, 0.31588927, -0.5722136, 0.012046551, 0.21745099, 0.0, 0.0,
    0.08691224, 0.6553534, -0.11697276, 0.35157993, -0.52392817, -0.38880116, 0.0, 0.0,
    -0.020580404, 0.55009216, -0.7280718, -0.1304792, 0.24263582, 0.30164474, 0.0, 0.0,
    -0.07212173, 0.12995633, 0.50941664, -0.6301315, -0.33640498, -0.45625705, 0.0, 0.0,
    -0.37510842, -0.13772304, 0.21865737, 0.5497179, 0.5848967, 0.38499492, 0.0, 0.0,
    -0.51510644, -0.55284274, -0.35222152, -0.14878146, -0.20041148, -0.49261504, 0.0, 0.0,
    -0.29754233, -0.38648182, -0.39028916, -0.3751963, -0.6726896, 0.12841782, 0.0, 0.0,
    -0.72972536, 0.39282432, 0.38606098, 0.3300833, 0.106205545, -0.20955254, 0.0, 0.0,
    0.74982727, 0.12545319, -0.023929052, -0.21739185, -0.4260546, 0.4389376, 0.0, 0.0,
    0.36756074, 0.0003317216, -0.30650657, -0.7986809, 0.30473962, -0.20048758, 0.0, 0.0,
    0.27731875, -0.3441189, 0.6649291, 0.17081003, -0.18886964, 0.54561704, 0.0, 0.0,
    0.17308925, -0.6726063, 0.18093613, -0.24010779, 0.64313, -0.116769426, 0.0, 0.0,
    -0.011926751, 0.37117648, -0.047677733, 0.7425545, 0.055506833, 0.55257976, 0.0, 0.0,
    -0.13292323, 0.24573086, -0.58716375, 0.18949725, -0.72871035, -0.1012844, 0.0, 0.0,
    -0.17788936, -0.034138225, 0.44325095, -0.2391553, 0.20933406, 0.81835353, 0.0, 0.0,
    -0.43986204, -0.27876, 0.15287794, 0.78864694, -0.28880525, 0.008373555, 0.0, 0.0,
    -0.3436312, -0.4420626, -0.21422449, 0.08743849, 0.35793298, -0.7105242, 0.0, 0.0,
    -0.57805336, 0.34801698, -0.7145251, -0.18036112, -0.016288213, 0.037375256, 0.0, 0.0,
    0.40650126, 0.17883952, 0.20424482, 0.45543152, -0.55269414, -0.49816516, 0.0, 0.0,
    0.88758403, 0.08815089, -0.007673825, 0.119998, 0.37391537, 0.22394852, 0.0, 0.0,
    0.35131684, -0.21112065, -0.45942938, -0.4249939, -0.39189303, -0.535471, 0.0, 0.0,
    0.16449653, -0.44734633, 0.5964204, 0.48048672, 0.3566494, 0.24297862, 0.0, 0.0,
    0.11778274, 0.84596306, 0.20376034, -0.09285874, -0.08453013, -0.46172214, 0.0, 0.0,
    -0.015801718, 0.3343525, -0.16153584, -0.5073964, 0.7510467, 0.20085472, 0.0, 0.0,
    -0.32377657, 0.09342709, -0.6918205, 0.4865304, 0.024240138, -0.41294688, 0.0, 0.0,
    -0.38171822, -0.21222018, 0.4876732, -0.028907072, -0.58323514, 0.48003104, 0.0, 0.0,
    -0.56732976, -0.41039586, 0.070034064, -0.58596534, 0.27362284, -0.29424915, 0.0, 0.0,
    -0.68503976, 0.5548075, -0.12973274, 0.22343831, -0.17736293, 0.3531236, 0.0, 0.0,
    0.47983927, 0.2312937, -0.7313516, -0.14162523, 0.3792339, -0.13231121, 0.0, 0.0,
    0.46750394, 0.08296824, 0.2997761, -0.6335299, -0.00905716, 0.5322109, 0.0, 0.0,
    0.19967823, -0.14356585, -0.11528049, 0.33075792, -0.8849013, -0.18378472, 0.0, 0.0,
    0.20781164, -0.4167066, -0.42556888, -0.13965277, 0.19111004, 0.7389419, 0.0, 0.0,
    -0.02431131, -0.6586579, 0.3542867, -0.61695856, -0.23865743, -0.049643047, 0.0, 0.0,
    -0.074672945, 0.370161, 0.12528794, 0.21377453, 0.3615417, 0.81565666, 0.0, 0.0,
    -0.5464077, 0.3631986, -0.4312259, -0.52426463, -0.32095006, 0.07554628, 0.0, 0.0,
    -0.13797295, -0.08365206, -0.3797911, 0.43244407, 0.62550926, -0.5014527, 0.0, 0.0,
    -0.75750417, -0.32703242, 0.4864544, 0.2385961, 0.12450554, 0.10084447, 0.0, 0.0,
    0.6992682, -0.46516722, 0.009912147, -0.20247708, -0.29449737, -0.40843546, 0.0, 0.0,
    0.5391095, 0.41140068, -0.27023935, 0.5857828, 0.30528337, 0.17533298, 0.0, 0.0,
    0.25799385, 0.2239172, 0.82328784, 0.09989437, -0.12779143, -0.4233058, 0.0, 0.0,
    0.3637198, -0.035369147, 0.29110932, -0.36214387, 0.77599096, 0.2200048, 0.0, 0.0,
    0.1417498, -0.2812015, -0.08123184, 0.77914435, 0.02546092, -0.5352756, 0.0, 0.0,
    -0.012096412, -0.5916544, -0.43297088, 0.13854696, -0.59522575, 0.2980704, 0.0, 0.0,
    -0.045186643, 0.6198062, 0.5738309, -0.34063885, 0.27954704, -0.30055827, 0.0, 0.0,
    -0.36215562, 0.284865, 0.19516088, 0.652774, -0.3249742, 0.46678194, 0.0, 0.0,
    -0.6012399, 0.028927328, -0.2626114, -0.06070836, 0.671143, -0.33851227, 0.0, 0.0,
    -0.51256967, -0.15670656, -0.6447269, -0.44234413, -0.108918, 0.29918423, 0.0, 0.0,
    0.60380465, -0.3628855, 0.2925943, 0.29005885, -0.559523, -0.14464626, 0.0, 0.0,
    0.5262467, 0.63517034, 0.044415165, -0.052717965, 0.16180687, 0.5372985, 0.0, 0.0,
    0.4316743, 0.35607117, -0.40154946, -0.6259878, -0.3444677, -0.122922294, 0.0, 0.0,
    0.18642394, 0.053340875, 0.6253791, 0.28178784, 0.31774953, 0.6252461, 0.0, 0.0,
    0.3459743, -0.4752861, 0.6496733, -0.2683449, -0.38695058, -0.10290665, 0.0, 0.0,
    0.13122405, -0.27780527, -0.029775007, -0.4798669, 0.47208425, 0.6719986, 0.0, 0.0,
    -0.10700759, 0.87878346, -0.41301858, 0.20127839, 0.012929863, 0.07088362, 0.0, 0.0,
    -0.15955755, 0.27477473, 0.4492307, -0.09650148, -0.42005256, -0.71517503, 0.0, 0.0,
    -0.38024795, 0.1203481, 0.10482688, -0.8781857, 0.2402795, 0.031541068, 0.0, 0.0,
    -0.68328303, -0.10322699, -0.2659511, 0.18987037, -0.27447322, -0.58339715, 0.0, 0.0,
    0.6600004, -0.31422853, -0.45022783, -0.16770066, 0.47102553, 0.11386955, 0.0, 0.0,
    0.25344613, -0.6440557, 0.26238537, 0.6127703, -0.026496254, -0.27553895, 0.0, 0.0,
    0.28247124, 0.44326058, -0.0043781614, 0.16197138, -0.8084155, 0.20961998, 0.0, 0.0,
    0.34651563, 0.24884488, -0.46191397, -0.45030916, 0.2500059, -0.58254385, 0.0, 0.0,
    0.07752529, -0.045247193, 0.61524487, 0.6731634, -0.23371853, 0.3250276, 0.0, 0.0,
    -0.1383016, -0.4513397, 0.34606338, 0.083043434, 0.62476414, -0.5100773, 0.0, 0.0,
    -0.1132983, -0.8356571, -0.10102603, -0.31589633, -0.10871334, 0.40868732, 0.0, 0.0,
    -0.18894218, 0.38641316, -0.36716804, 0.3820719, 0.71629107, -0.14533256, 0.0, 0.0,
    -0.5486929, 0.2137965, 0.6193731, 0.06529268, 0.088723786, 0.5074141, 0.0, 0.0,
    -0.7650985, -0.023335088, -0.016905356, -0.43613544, -0.44252416, -0.16658974, 0.0, 0.0,
    0.696835, -0.29601705, -0.11277232, 0.3538726, 0.24121274, 0.48027903, 0.0, 0.0,
    0.47013983, -0.52269113, -0.6933023, 0.0054965066, -0.15781996, -0.01253543, 0.0, 0.0,
    0.31164542, 0.3954223, 0.20016631, -0.3432397, 0.51772773, 0.56621224, 0.0, 0.0,
    0.32430303, 0.48207462, -0.006647129, 0.7909543, -0.10112212, -0.1629511, 0.0, 0.0,
    -0.059590075, 0.033622075, -0.30150685, -0.10272599, -0.5352567, 0.77933294, 0.0, 0.0,
    0.04976951, -0.29402363, 0.75890255, -0.5138473, 0.26335162, 0.041795954, 0.0, 0.0,
    -0.1318024, -0.5483047, 0.18507576, 0.2684311, -0.34715945, -0.67465705, 0.0, 0.0,
    -0.34048063, 0.78709024, -0.110350676, -0.16945715, 0.45719254, 0.12101191, 0.0, 0.0,
    -0.40941042, 0.20002691, -0.52991676, -0.5997996, -0.0505065, -0.38632908, 0.0, 0.0,
    -0.6039733, 0.060302697, 0.20738918, 0.30027705, -0.6845262, 0.17270526, 0.0, 0.0,
    0.8185934, -0.14923199, 0.13514253, -0.21862067, 0.17904732, -0.45773166, 0.0, 0.0,
    0.36880708, -0.3633902, -0.15213574, -0.7476833, -0.35851073, 0.14568225, 0.0, 0.0,
    0.3131714, 0.66121966, -0.59695226, 0.14591174, 0.18871887, -0.22683737, 0.0, 0.0,
    0.26362327, 0.58156455, 0.47176012, -0.32725736, -0.21788512, 0.46384972, 0.0, 0.0,
    0.079091325, 0.04330349, -0.014125759, 0.77147967, 0.5998128, -0.19160789, 0.0, 0.0,
    -0.12228741, -0.16819063, -0.74896413, 0.19235854, 0.13002709, 0.58472353, 0.0, 0.0,
    -0.14307658, -0.46556732, 0.6636406, -0.18191189, -0.50576407, -0.18294267, 0.0, 0.0,
    -0.29128796, -0.6553711, 0.1304415, 0.54744905, 0.18539755, 0.36681366, 0.0, 0.0,
    -0.6665839, 0.45552638, -0.22768782, 0.118716605, -0.47137102, -0.24502155, 0.0, 0.0,
    -0.6222923, 0.116177686, -0.47100157, -0.2647117, 0.35209915, 0.42821318, 0.0, 0.0,
    0.7039888, -0.10598641, 0.44090188, 0.5384897, 0.003026188, -0.09376517, 0.0, 0.0,
    0.36950228, -0.28257278, 0.07073469, 0.09147359, -0.6399394, 0.60060585, 0.0, 0.0,
    0.35766307, -0.7869443, -0.25107852, -0.38380513, 0.19345573, 0.07087929, 0.0, 0.0,
    0.1301296, 0.24653773, -0.6655153, 0.22697765, -0.13507539, 0.6400083, 0.0, 0.0,
    -0.026935395, 0.35812053, 0.5725581, -0.034398504, 0.7360805, -0.014266988, 0.0, 0.0,
    -0.11027228, -0.021373061, -0.025171764, -0.6041984, -0.14803798, -0.7744538, 0.0, 0.0,
    -0.10997683, -0.2563314, -0.4002119, 0.36440128, 0.78780437, 0.092767, 0.0, 0.0,
    -0.26821327, -0.60049635, 0.57244664, -0.035128035, 0.06783589, -0.48366824, 0.0, 0.0,
    -0.4951398, 0.5427961, 0.04525238, -0.50037813, -0.4018832, 0.21511121, 0.0, 0.0,
    -0.7904704, 0.20828336, -0.15508217, 0.2998809, 0.24005067, -0.400214, 0.0, 0.0,
    0.65501124, 0.016088294, -0.6788037, -0.08211665, -0.23207268, 0.22209483, 0.0, 0.0,
    0.41709867, -0.117938094, 0.31218654, -0.54891497, 0.57860845, -0.28029174, 0.0, 0.0,
    0.38572183, -0.74001354, 0.076306805, 0.3234668, -0.021037953, 0.43897897, 0.0, 0.0,
    0.06777139, 0.65891767, -0.33391783, -0.20179558, -0.58294743, -0.26302907, 0.0, 0.0,
    0.049827054, 0.23855221, 0.7111371, -0.5807573, 0.17142, 0.26120907, 0.0, 0.0,
    -0.17112508, 0.15048747, 0.45636827, 0.50296515, -0.53603023, -0.4466491, 0.0, 0.0,
    -0.42091382, -0.2393345, 0.0038308015, -0.20277458, 0.5290295, 0.6667429, 0.0, 0.0,
    -0.3305531, -0.41028845, -0.38285717, 0.75238025, -0.02747968, -0.094800904, 0.0, 0.0,
    -0.3003857, 0.48829263, 0.28291735, 0.1189249, -0.5827435, 0.48740467, 0.0, 0.0,
    -0.9478263, 0.21465479, 0.10025274, -0.20021513, 0.0730332, -0.00883542, 0.0, 0.0,
    0.45049638, 0.089601874, -0.140966, 0.57141304, -0.25493592, 0.6145307, 0.0, 0.0,
    0.40678287, -0.1944321, -0.75196177, 0.2473498, 0.41208407, -0.016798187, 0.0, 0.0,
    0.10729553, -0.2762518, 0.35975125, -0.2760728, -0.28450483, -0.79094404, 0.0, 0.0,
    0.073242806, -0.7312999, -0.056001175, 0.42483863, 0.52455944, 0.032393444, 0.0, 0.0,
    -0.0024368274, 0.47519386, -0.28543562, 0.042497467, -0.008843161, -0.8311601, 0.0, 0.0,
    0.02487316, 0.1308349, 0.83284664, -0.3228458, -0.40815097, 0.13346681, 0.0, 0.0,
    -0.26560214, -0.06026757, 0.3882957, 0.5103554, 0.2663647, -0.6660608, 0.0, 0.0,
    -0.64021575, -0.49869224, -0.20653729, 0.106423356, -0.48720554, 0.22377901, 0.0, 0.0,
    -0.43952742, -0.49596298, -0.43109357, -0.36413145, 0.38853022, -0.30240253, 0.0, 0.0,
    0.78864497, 0.38415074, 0.39484134, 0.24297914, 0.03393033, 0.11990612, 0.0, 0.0,
    0.5343194, 0.18709771, 0.1423344, -0.089133054, -0.7060293, -0.390917, 0.0, 0.0,
    0.5097239, -0.026239581, -0.21243668, -0.708224, 0.24643244, 0.36339173, 0.0, 0.0,
    0.2411482, -0.17181382, -0.76536226, 0.37093806, -0.36944172, -0.2290545, 0.0, 0.0,
    0.19683214, -0.6593956, 0.39989847, -0.11699685, 0.37857738, 0.4577408, 0.0, 0.0,
    0.053253956, 0.6767488, -0.07080215, -0.71251863, -0.032740816, -0.15939687, 0.0, 0.0,
    -0.030198656, 0.27774018, -0.29944417, 0.27909896, 0.74349695, 0.44899637, 0.0, 0.0,
    -0.29970387, 0.033937007, 0.9134845, -0.08752818, 0.13480821, -0.22076567, 0.0, 0.0,
    -0.30794758, -0.1812211, 0.12378531, -0.70209557, -0.43837088, 0.41460487, 0.0, 0.0,
    -0.6453127, -0.6401123, -0.10431251, 0.28090477, 0.27818808, -0.08155097, 0.0, 0.0,
    0.5990296, 0.43964806, -0.35957396, -0.14188315, -0.14238644, 0.5274229, 0.0, 0.0,
    0.42796835, 0.22815552, 0.34527254, 0.62953603, 0.49911755, 0.011877991, 0.0, 0.0,
    0.24504136, 0.10996711, 0.12697928, 0.14146288, -0.09571778, -0.9394491, 0.0, 0.0,
    0.22963893, -0.19665733, -0.30553538, -0.31277633, -0.84350926, 0.07683176, 0.0, 0.0,
    0.08704216, -0.3432866, -0.59365016, 0.49252504, 0.17701267, -0.49823993, 0.0, 0.0,
    0.017391963, 0.8928676, 0.34135976, 0.053087067, -0.26403397, 0.11587183, 0.0, 0.0,
    -0.12155972, 0.40392798, 0.041764934, -0.44560805, 0.49151725, -0.61657554, 0.0, 0.0,
    -0.4244688, 0.100937314, -0.35706878, 0.77368504, -0.15302235, 0.24522513, 0.0, 0.0,
    -0.18474343, -0.13001591, 0.42968524, 0.111779325, -0.78881645, -0.36001435, 0.0, 0.0,
    -0.77187127, -0.34298033, 0.22940952, -0.3523105, 0.15508391, 0.29287678, 0.0, 0.0,
    0.449469, -0.75756246, -0.08845454, 0.26641297, -0.32295296, -0.2024303, 0.0, 0.0,
    0.51603764, 0.42125794, -0.5046403, 0.008505109, 0.4081434, 0.36733058, 0.0, 0.0,
    0.46389502, 0.17406586, 0.5286338, -0.5902665, -0.18181409, -0.30590498, 0.0, 0.0,
    0.27482224, -0.07035485, 0.1071328, 0.42505333, 0.7388532, 0.42599428, 0.0, 0.0,
    0.09351286, -0.69087124, -0.54011613, -0.011362709, 0.10030105, -0.46047527, 0.0, 0.0,
];
