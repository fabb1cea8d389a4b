use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lumo_image::Image;
use lumo_imgproc::filter::{convolve3x3, denoise_blend, kernels, median_blur3x3};

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filters3x3");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_data = (0..width * height * 3).map(|x| (x % 256) as u8).collect();
        let image_size = [*width, *height].into();

        let image = Image::<u8, 3>::new(image_size, image_data).unwrap();

        // output image
        let output = Image::<u8, 3>::from_size_val(image_size, 0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("convolve3x3_mean", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(convolve3x3(src, &mut dst, &kernels::mean_kernel3())))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("convolve3x3_gaussian", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(convolve3x3(src, &mut dst, &kernels::gaussian_kernel3())))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("median_blur3x3", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(median_blur3x3(src, &mut dst)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("denoise_blend", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(denoise_blend(src, &mut dst)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
