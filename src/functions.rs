use crate::error::AuditError;
use aws_sdk_lambda::{model::FunctionConfiguration, Client, Error};
use tokio::time::timeout;

/// List every function deployed in one region, following `NextMarker`
/// pagination until the listing is exhausted. A region without functions
/// yields an empty vec, not an error. Listing failures bubble up so the
/// caller can skip the region and keep going.
#[tracing::instrument(skip(client))]
pub async fn list_functions(
    client: &Client,
    region: &str,
) -> Result<Vec<FunctionConfiguration>, AuditError> {
    let mut functions = Vec::new();
    let mut marker: Option<String> = None;

    loop {
        let res = timeout(
            crate::REQUEST_TIMEOUT,
            client.list_functions().set_marker(marker).send(),
        )
        .await
        .map_err(|_| AuditError::Timeout("lambda:ListFunctions"))?
        .map_err(Error::from)?;

        if let Some(batch) = res.functions {
            functions.extend(batch);
        }

        marker = res.next_marker;
        if marker.is_none() {
            break;
        }
    }

    Ok(functions)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_util::*;
    use aws_sdk_lambda::{Client, Config};
    use aws_smithy_client::{erase::DynConnector, test_connection::TestConnection};
    use aws_smithy_http::body::SdkBody;

    #[tokio::test]
    async fn test_list_functions_follows_pagination() -> Result<(), AuditError> {
        // GIVEN a region whose listing spans two pages
        let conn = TestConnection::new(vec![
            (
                get_request_builder("lambda").body(SdkBody::empty()).unwrap(),
                http::Response::builder()
                    .status(200)
                    .body(SdkBody::from(
                        r#"{"Functions": [{"FunctionName": "first", "FunctionArn": "arn:aws:lambda:us-west-1:123456789012:function:first", "Runtime": "python3.9", "MemorySize": 128, "CodeSize": 1048576, "Timeout": 3, "LastModified": "2022-01-01T00:00:00.000+0000", "Description": "first function"}], "NextMarker": "page-2"}"#,
                    ))
                    .unwrap(),
            ),
            (
                get_request_builder("lambda").body(SdkBody::empty()).unwrap(),
                http::Response::builder()
                    .status(200)
                    .body(SdkBody::from(
                        r#"{"Functions": [{"FunctionName": "second", "FunctionArn": "arn:aws:lambda:us-west-1:123456789012:function:second", "Runtime": "nodejs16.x", "MemorySize": 256, "CodeSize": 2097152, "Timeout": 30, "LastModified": "2022-02-01T00:00:00.000+0000", "Description": "second function"}]}"#,
                    ))
                    .unwrap(),
            ),
        ]);
        let config = Config::new(&get_mock_config().await);
        let client = Client::from_conf_conn(config, DynConnector::new(conn));

        // WHEN listing the region
        let functions = list_functions(&client, "us-west-1").await?;

        // THEN both pages contribute their functions
        assert_eq!(2, functions.len());
        assert_eq!(Some("first"), functions[0].function_name());
        assert_eq!(Some("second"), functions[1].function_name());
        assert_eq!(1_048_576, functions[0].code_size());
        assert_eq!(Some(256), functions[1].memory_size());

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_region_is_not_an_error() -> Result<(), AuditError> {
        // GIVEN a region with no deployed functions
        let conn = TestConnection::new(vec![(
            get_request_builder("lambda").body(SdkBody::empty()).unwrap(),
            http::Response::builder()
                .status(200)
                .body(SdkBody::from(r#"{"Functions": []}"#))
                .unwrap(),
        )]);
        let config = Config::new(&get_mock_config().await);
        let client = Client::from_conf_conn(config, DynConnector::new(conn));

        // WHEN listing the region THEN the result is an empty vec
        let functions = list_functions(&client, "us-west-1").await?;
        assert!(functions.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_listing_failure_surfaces_to_the_caller() {
        // GIVEN a region whose listing call is rejected
        let conn = TestConnection::new(vec![(
            get_request_builder("lambda").body(SdkBody::empty()).unwrap(),
            http::Response::builder()
                .status(400)
                .body(SdkBody::from(
                    r#"{"Type": "User", "message": "The role defined for the function cannot be assumed"}"#,
                ))
                .unwrap(),
        )]);
        let config = Config::new(&get_mock_config().await);
        let client = Client::from_conf_conn(config, DynConnector::new(conn));

        // WHEN listing the region THEN the error reaches the caller, which
        // skips the region instead of aborting the run
        assert!(list_functions(&client, "us-west-1").await.is_err());
    }
}
