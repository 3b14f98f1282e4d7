// 生成 RouteGuide 的 gRPC 服务端/客户端代码
//
// 消息类型在 protocol/messages.rs 中手写（prost::Message），这里只用 tonic-build 的
// manual builder 生成服务桩代码，因此构建时不依赖 protoc。

fn main() {
    let method = |name: &str, route_name: &str, input: &str, output: &str| {
        tonic_build::manual::Method::builder()
            .name(name)
            .route_name(route_name)
            .input_type(format!("crate::protocol::{}", input))
            .output_type(format!("crate::protocol::{}", output))
            .codec_path("tonic::codec::ProstCodec")
    };

    let service = tonic_build::manual::Service::builder()
        .name("RouteGuide")
        .package("routeguide")
        .comment("Interface exported by the server.")
        .method(
            method("get_feature", "GetFeature", "Point", "Feature")
                .comment("Obtains the feature at a given position.")
                .build(),
        )
        .method(
            method("list_features", "ListFeatures", "Rectangle", "Feature")
                .comment("Obtains the Features available within the given Rectangle.")
                .server_streaming()
                .build(),
        )
        .method(
            method("record_route", "RecordRoute", "Point", "RouteSummary")
                .comment("Accepts a stream of Points on a route being traversed.")
                .client_streaming()
                .build(),
        )
        .method(
            method("route_chat", "RouteChat", "RouteNote", "RouteNote")
                .comment("Accepts a stream of RouteNotes sent while a route is being traversed.")
                .client_streaming()
                .server_streaming()
                .build(),
        )
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);

    println!("cargo:rerun-if-changed=build.rs");
}
