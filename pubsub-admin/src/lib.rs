#[macro_use]
extern crate log;

use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::{self, LocalBoxStream, StreamExt};
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_pubsub::client::TopicAdmin;

use topic_lister::{Backend, BoxError, Session, TopicId};

/// Google Cloud Pub/Sub topic administration, authenticated with
/// Application Default Credentials.
#[derive(Debug, Clone, Default)]
pub struct PubSubBackend {
    endpoint: Option<String>,
    page_size: Option<i32>,
}

impl PubSubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Talk to `endpoint` instead of the production service.
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Maximum number of topics per page; the service picks when unset.
    pub fn with_page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }

    async fn create_admin_client(&self) -> Result<TopicAdmin, BoxError> {
        let mut builder = TopicAdmin::builder();
        if let Some(endpoint) = &self.endpoint {
            debug!("using pub/sub endpoint {}", endpoint);
            builder = builder.with_endpoint(endpoint.clone());
        }

        let client = builder.build().await?;

        Ok(client)
    }
}

impl Backend for PubSubBackend {
    type Session = PubSubSession;

    fn connect<'a>(
        &'a self,
        project_id: &'a str,
    ) -> LocalBoxFuture<'a, Result<PubSubSession, BoxError>> {
        async move {
            let client = self.create_admin_client().await?;

            Ok(PubSubSession {
                client,
                project: project_resource(project_id),
                page_size: self.page_size,
            })
        }
        .boxed_local()
    }
}

/// A topic admin client scoped to one project.
pub struct PubSubSession {
    client: TopicAdmin,
    project: String,
    page_size: Option<i32>,
}

impl Session for PubSubSession {
    fn topics(&self) -> LocalBoxStream<'_, Result<TopicId, BoxError>> {
        let mut request = self.client.list_topics().set_project(self.project.clone());
        if let Some(page_size) = self.page_size {
            request = request.set_page_size(page_size);
        }

        let items = request.by_item();
        stream::unfold(items, |mut items| async move {
            let item = items.next().await?;
            Some((item, items))
        })
        .map(|item| -> Result<TopicId, BoxError> {
            let topic = item?;
            Ok(TopicId::from_resource_name(&topic.name)?)
        })
        .boxed_local()
    }
}

fn project_resource(project_id: &str) -> String {
    format!("projects/{}", project_id)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use google_cloud_gax::error::Error;
    use google_cloud_gax::options::RequestOptions;
    use google_cloud_gax::response::Response;
    use google_cloud_pubsub::model::{ListTopicsRequest, ListTopicsResponse, Topic};
    use google_cloud_pubsub::stub;

    use super::*;

    /// Serves scripted `ListTopics` pages and records every request.
    #[derive(Debug)]
    struct PagedTopics {
        pages: Mutex<VecDeque<google_cloud_pubsub::Result<ListTopicsResponse>>>,
        requests: Arc<Mutex<Vec<ListTopicsRequest>>>,
    }

    impl stub::TopicAdmin for PagedTopics {
        async fn list_topics(
            &self,
            req: ListTopicsRequest,
            _options: RequestOptions,
        ) -> google_cloud_pubsub::Result<Response<ListTopicsResponse>> {
            self.requests.lock().unwrap().push(req);
            let page = self.pages.lock().unwrap().pop_front().unwrap();
            page.map(Response::from)
        }
    }

    fn page(ids: &[&str], next_page_token: &str) -> google_cloud_pubsub::Result<ListTopicsResponse> {
        let topics = ids
            .iter()
            .map(|id| Topic::new().set_name(format!("projects/demo/topics/{}", id)));

        Ok(ListTopicsResponse::new()
            .set_topics(topics)
            .set_next_page_token(next_page_token))
    }

    #[tokio::test]
    async fn drains_every_page_until_the_failure() {
        let requests = Arc::new(Mutex::new(vec![]));
        let stub = PagedTopics {
            pages: Mutex::new(VecDeque::from(vec![
                page(&["a", "b"], "p2"),
                page(&["c"], "p3"),
                Err(Error::io("connection reset")),
            ])),
            requests: requests.clone(),
        };
        let session = PubSubSession {
            client: TopicAdmin::from_stub(stub),
            project: project_resource("demo"),
            page_size: Some(2),
        };

        let mut topics = session.topics();
        let mut ids = vec![];
        for _ in 0..3 {
            ids.push(topics.next().await.unwrap().unwrap().to_string());
        }
        let failure = topics.next().await.unwrap();

        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(failure.is_err());

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 3);
        for req in requests.iter() {
            assert_eq!(req.project, "projects/demo");
            assert_eq!(req.page_size, 2);
        }
        let tokens: Vec<&str> = requests.iter().map(|r| r.page_token.as_str()).collect();
        assert_eq!(tokens, vec!["", "p2", "p3"]);
    }

    #[tokio::test]
    async fn empty_identifier_fails_the_listing() {
        let stub = PagedTopics {
            pages: Mutex::new(VecDeque::from(vec![Ok(ListTopicsResponse::new()
                .set_topics(vec![Topic::new().set_name("projects/demo/topics/")]))])),
            requests: Arc::new(Mutex::new(vec![])),
        };
        let session = PubSubSession {
            client: TopicAdmin::from_stub(stub),
            project: project_resource("demo"),
            page_size: None,
        };

        let mut topics = session.topics();

        assert!(topics.next().await.unwrap().is_err());
    }

    #[test]
    fn project_resource_name() {
        assert_eq!(project_resource("demo"), "projects/demo");
    }

    #[test]
    fn builder_keeps_settings() {
        let backend = PubSubBackend::new()
            .with_endpoint(Some(String::from("http://localhost:8085")))
            .with_page_size(Some(50));

        assert_eq!(backend.endpoint.as_deref(), Some("http://localhost:8085"));
        assert_eq!(backend.page_size, Some(50));
    }

    #[test]
    fn defaults_to_production_endpoint() {
        let backend = PubSubBackend::new();

        assert!(backend.endpoint.is_none());
        assert!(backend.page_size.is_none());
    }
}
